//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스, 외부 지오코딩 API 호출 시 블로킹 없음
//!
//! ### 2. 타입 안전성
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증, 실패 시 즉시 422 반환
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: AppError 하나로 모든 에러를 중앙 응답기에서 처리
//!
//! ## 모듈 구성
//!
//! - **`places`**: 장소 관리 엔드포인트
//!   - 장소 생성 (`POST /places`)
//!   - 장소 조회 (`GET /places/{id}`)
//!   - 장소 수정 (`PATCH /places/{id}`)
//!   - 장소 삭제 (`DELETE /places/{id}`)
//!
//! - **`users`**: 사용자 연관 조회 엔드포인트
//!   - 사용자별 장소 목록 (`GET /users/{id}/places`)

pub mod places;
pub mod users;
