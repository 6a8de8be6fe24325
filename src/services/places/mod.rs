//! 장소 서비스 모듈
//!
//! 장소 CRUD 비즈니스 로직과 트랜잭션 조율을 담당합니다.

pub mod place_service;
