//! # Place Management HTTP Handlers
//!
//! 장소 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/places` | 새 장소 생성 | 201 Created |
//! | `GET` | `/places/{id}` | 장소 조회 | 200 OK |
//! | `PATCH` | `/places/{id}` | 장소 제목/설명 수정 | 200 OK |
//! | `DELETE` | `/places/{id}` | 장소 삭제 | 200 OK |
//!
//! ## 에러 응답
//!
//! 모든 실패는 `AppError`를 통해 `{"error": "..."}` JSON 본문과
//! 해당 상태 코드(422/404/500)로 변환됩니다.

use actix_web::{web, HttpResponse, delete, get, patch, post};
use validator::Validate;
use crate::domain::dto::places::request::{CreatePlaceRequest, UpdatePlaceRequest};
use crate::errors::errors::AppError;
use crate::services::places::place_service::PlaceService;

/// 장소 생성 핸들러
///
/// 새로운 장소를 생성합니다. 주소는 외부 지오코딩 서비스로 좌표화되며,
/// 장소 문서와 생성자의 장소 목록이 하나의 트랜잭션으로 갱신됩니다.
///
/// # 엔드포인트
///
/// `POST /places`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Empire State",
///   "description": "Tall building",
///   "address": "20 W 34th St, NYC",
///   "image": "uploads/images/empire.png",
///   "creator": "66b2a1f9c4e7d3a8b1f02c4d"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "id": "66b2a2e1c4e7d3a8b1f02c4e",
///   "title": "Empire State",
///   "description": "Tall building",
///   "image": "uploads/images/empire.png",
///   "address": "20 W 34th St, NYC",
///   "location": { "latitude": 40.74854, "longitude": -73.98566 },
///   "creator": "66b2a1f9c4e7d3a8b1f02c4d"
/// }
/// ```
///
/// ## 실패 사례
///
/// - 입력 검증 실패 (422): 제목 누락, 설명 5자 미만, 잘못된 creator 형식
/// - 지오코딩 실패 (422): 주소를 좌표로 변환하지 못함
/// - 생성자 없음 (422): creator ID에 해당하는 사용자가 없음
/// - 트랜잭션 실패 (500): 이중 문서 쓰기 중단
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/places \
///   -H "Content-Type: application/json" \
///   -d '{
///     "title": "Empire State",
///     "description": "Tall building",
///     "address": "20 W 34th St, NYC",
///     "image": "uploads/images/empire.png",
///     "creator": "66b2a1f9c4e7d3a8b1f02c4d"
///   }'
/// ```
#[post("")]
pub async fn create_place(
    payload: web::Json<CreatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사 - 실패 시 지오코딩/저장 단계로 진행하지 않고 즉시 반환
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PlaceService::instance();
    let response = service.create_place(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 장소 조회 핸들러
///
/// 지정된 ID의 장소 정보를 조회합니다. 내부 `_id`는 공개용 `id`
/// 문자열로 변환되어 반환됩니다.
///
/// # 엔드포인트
///
/// `GET /places/{place_id}`
///
/// # 실패 사례
///
/// - 장소 없음 (404)
/// - 조회 실패 (500): 잘못된 ID 형식, 연결 오류
#[get("/{place_id}")]
pub async fn get_place(
    place_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PlaceService::instance();
    let place = service.get_place_by_id(&place_id).await?;

    Ok(HttpResponse::Ok().json(place))
}

/// 장소 수정 핸들러
///
/// 장소의 제목과 설명을 수정합니다. 주소, 좌표, 이미지, 생성자는
/// 생성 이후 불변이므로 수정할 수 없습니다.
///
/// # 엔드포인트
///
/// `PATCH /places/{place_id}`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Renamed place",
///   "description": "Updated description"
/// }
/// ```
///
/// # 실패 사례
///
/// - 입력 검증 실패 (422)
/// - 장소 없음 (404)
/// - 저장 실패 (500)
#[patch("/{place_id}")]
pub async fn update_place(
    place_id: web::Path<String>,
    payload: web::Json<UpdatePlaceRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = PlaceService::instance();
    let place = service.update_place(&place_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(place))
}

/// 장소 삭제 핸들러
///
/// 지정된 ID의 장소를 삭제합니다. 장소 문서 삭제와 소유 사용자의
/// 장소 목록 갱신이 하나의 트랜잭션으로 수행되며, 커밋 이후 연결된
/// 이미지 파일이 best-effort 로 정리됩니다.
///
/// # 엔드포인트
///
/// `DELETE /places/{place_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "message": "Deleted place." }
/// ```
///
/// # 실패 사례
///
/// - 장소 없음 (404)
/// - 트랜잭션 실패 (500)
#[delete("/{place_id}")]
pub async fn delete_place(
    place_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = PlaceService::instance();
    let response = service.delete_place(&place_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
