//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 환경 관련 설정
//! - [`geo_config`] - 외부 지오코딩 서비스 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보(지오코딩 API 키)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 필수 설정값 누락 시 애플리케이션 시작 단계에서 실패
//!
//! ### 3. 명시적 주입 (Explicit Injection)
//!
//! 호출 시점의 전역 조회 대신, 설정값을 시작 시점에 한 번 읽어
//! 해당 값을 사용하는 컴포넌트의 생성자에 주입합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 지오코딩 설정
//! export GEOCODING_API_KEY="your-api-key"
//! export GEOCODING_SEARCH_URL="https://us1.locationiq.com/v1/search"
//! ```

pub mod data_config;
pub mod geo_config;

pub use data_config::*;
pub use geo_config::*;
