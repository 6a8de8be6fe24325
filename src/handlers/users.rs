//! # User-scoped HTTP Handlers
//!
//! 사용자 기준의 장소 조회 엔드포인트를 처리하는 핸들러입니다.

use actix_web::{web, HttpResponse, get};
use crate::errors::errors::AppError;
use crate::services::places::place_service::PlaceService;

/// 사용자별 장소 목록 조회 핸들러
///
/// 지정된 사용자가 생성한 모든 장소를 반환합니다.
///
/// # 엔드포인트
///
/// `GET /users/{user_id}/places`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "places": [
///     {
///       "id": "66b2a2e1c4e7d3a8b1f02c4e",
///       "title": "Empire State",
///       "creator": "66b2a1f9c4e7d3a8b1f02c4d"
///     }
///   ]
/// }
/// ```
///
/// # 실패 사례
///
/// - 결과 없음 (404): 장소가 없거나 사용자가 존재하지 않는 경우
///   (두 경우는 구분하지 않습니다)
/// - 조회 실패 (500)
#[get("/{user_id}/places")]
pub async fn get_places_by_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PlaceService::instance();
    let places = service.get_places_by_user_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(places))
}
