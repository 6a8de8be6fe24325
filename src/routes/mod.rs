//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 장소 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 장소 CRUD API 엔드포인트
//! - 사용자별 장소 목록 조회 엔드포인트
//! - 헬스체크 엔드포인트
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_place_routes(cfg);
    configure_user_routes(cfg);
}

/// 장소 관련 라우트를 설정합니다
///
/// 장소 생성, 조회, 수정, 삭제 API 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/places` - 장소 생성
/// - `GET /api/v1/places/{place_id}` - 장소 조회
/// - `PATCH /api/v1/places/{place_id}` - 장소 수정
/// - `DELETE /api/v1/places/{place_id}` - 장소 삭제
///
/// # Examples
///
/// ```bash
/// curl -X GET http://localhost:8080/api/v1/places/66b2a1f9c4e7d3a8b1f02c4d
/// ```
fn configure_place_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/places")
            .service(handlers::places::create_place)
            .service(handlers::places::get_place)
            .service(handlers::places::update_place)
            .service(handlers::places::delete_place)
    );
}

/// 사용자 연관 라우트를 설정합니다
///
/// 사용자 기준의 장소 목록 조회 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `GET /api/v1/users/{user_id}/places` - 사용자별 장소 목록
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::get_places_by_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "place_service",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "geocoding": "LocationIQ",
///     "dependency_injection": "Singleton Registry"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "place_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "geocoding": "LocationIQ",
            "dependency_injection": "Singleton Registry"
        }
    }))
}
