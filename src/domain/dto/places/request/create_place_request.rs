//! 장소 생성 요청 DTO
//!
//! 새로운 장소 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! 검증에 실패한 요청은 핸들러에서 즉시 422로 거부되며,
//! 지오코딩이나 저장 단계로 진행하지 않습니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 장소 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 주소 형식 자체는 검증하지 않습니다. 주소의 해석 가능 여부는
/// 외부 지오코딩 서비스가 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    /// 장소 제목 (1-100자)
    #[validate(length(
        min = 1,
        max = 100,
        message = "제목은 1-100자 사이여야 합니다"
    ))]
    pub title: String,

    /// 장소 설명 (최소 5자)
    #[validate(length(
        min = 5,
        message = "설명은 최소 5자 이상이어야 합니다"
    ))]
    pub description: String,

    /// 장소 주소 (지오코딩 대상 자유 형식 문자열)
    #[validate(length(min = 1, message = "주소는 필수입니다"))]
    pub address: String,

    /// 이미지 경로 또는 URL
    #[validate(length(min = 1, message = "이미지는 필수입니다"))]
    pub image: String,

    /// 생성자 사용자 ID (24자리 16진수 ObjectId)
    #[validate(custom(function = "validate_object_id"))]
    pub creator: String,
}

/// ObjectId 형식 검증 (24자리 16진수 문자열)
fn validate_object_id(id: &str) -> Result<(), ValidationError> {
    if ObjectId::parse_str(id).is_err() {
        return Err(ValidationError::new("invalid_object_id")
            .with_message("유효하지 않은 사용자 ID 형식입니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreatePlaceRequest {
        CreatePlaceRequest {
            title: "Empire State".to_string(),
            description: "Tall building".to_string(),
            address: "20 W 34th St, NYC".to_string(),
            image: "uploads/images/empire.png".to_string(),
            creator: ObjectId::new().to_hex(),
        }
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let mut request = valid_request();
        request.title = String::new();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_description_fails_validation() {
        let mut request = valid_request();
        request.description = "tiny".to_string();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_address_fails_validation() {
        let mut request = valid_request();
        request.address = String::new();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_malformed_creator_id_fails_validation() {
        let mut request = valid_request();
        request.creator = "not-an-object-id".to_string();

        assert!(request.validate().is_err());
    }
}
