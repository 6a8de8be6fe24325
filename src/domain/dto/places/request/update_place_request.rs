//! 장소 수정 요청 DTO
//!
//! 기존 장소의 제목과 설명 수정을 위한 HTTP 요청 데이터 구조입니다.
//! 주소, 좌표, 이미지, 생성자는 생성 이후 불변이므로 수정 대상이 아닙니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 장소 수정 요청 DTO
///
/// 제목과 설명만 수정할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_update_passes_validation() {
        let request = UpdatePlaceRequest {
            title: "Renamed place".to_string(),
            description: "Updated description".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_title_fails_validation() {
        let request = UpdatePlaceRequest {
            title: String::new(),
            description: "Updated description".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_short_description_fails_validation() {
        let request = UpdatePlaceRequest {
            title: "Renamed place".to_string(),
            description: "shrt".to_string(),
        };

        assert!(request.validate().is_err());
    }
}
