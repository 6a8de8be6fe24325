//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 실패는 호출 지점에서 아래 분류 중 하나로 변환된 뒤 `?` 연산자로
//! 중앙 에러 응답기까지 전파됩니다. 부분 복구나 재시도는 어디에서도
//! 수행하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_place(id: &str) -> Result<Place, AppError> {
//!     let place = place_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound("해당 ID의 장소를 찾을 수 없습니다".to_string()))?;
//!
//!     Ok(place)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 지오코딩 실패 에러 (422 Unprocessable Entity)
    ///
    /// 외부 지오코딩 서비스가 주소를 좌표로 변환하지 못한 경우입니다.
    /// 전송 오류, 빈 결과, 응답 파싱 실패를 모두 포함합니다.
    /// 호출자 입장에서는 어떤 원인이든 장소 생성을 거부해야 하므로
    /// 하나의 에러 종류로 통합합니다.
    #[error("Geocoding failed: {0}")]
    GeocodingFailed(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 다중 문서 쓰기 트랜잭션 실패 (500 Internal Server Error)
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    /// 스택 트레이스나 내부 정보는 응답에 포함되지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::GeocodingFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Title is required".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_geocoding_failed_response() {
        let error = AppError::GeocodingFailed("No results for address".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Place not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_storage_error_response() {
        let error = AppError::StorageError("Connection refused".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_transaction_failed_response() {
        let error = AppError::TransactionFailed("Commit aborted".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
