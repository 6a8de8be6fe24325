//! Place Entity Implementation
//!
//! 장소 엔티티의 핵심 구현체입니다.
//! 주소 문자열과 지오코딩으로 확정된 좌표, 소유 사용자 참조를 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 장소의 위경도 좌표
///
/// 지오코딩 결과를 수치로 정규화하여 보관합니다. 외부 제공자는 좌표를
/// 문자열로 내려주지만, 저장 시점에는 항상 `f64`로 파싱된 값만 허용합니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// 위도
    pub latitude: f64,
    /// 경도
    pub longitude: f64,
}

/// 장소 엔티티
///
/// 사용자가 등록한 장소를 표현하는 핵심 도메인 엔티티입니다.
/// 생성 시 지오코딩이 성공하고 생성자(creator)가 존재해야 하며,
/// `creator`는 해당 User 문서의 `places` 목록과 양방향으로 일관성을
/// 유지합니다. 주소, 좌표, 이미지, 생성자는 생성 이후 불변입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 장소 제목
    pub title: String,
    /// 장소 설명
    pub description: String,
    /// 이미지 경로 또는 URL
    pub image: String,
    /// 원본 주소 문자열
    pub address: String,
    /// 지오코딩으로 확정된 좌표
    pub location: Location,
    /// 소유 사용자 참조 (User._id)
    pub creator: ObjectId,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Place {
    /// 새 장소 엔티티 생성
    ///
    /// 지오코딩이 완료된 좌표와 존재가 확인된 생성자 ID로 장소를 만듭니다.
    /// `_id`는 MongoDB 삽입 시점에 할당됩니다.
    pub fn new(
        title: String,
        description: String,
        image: String,
        address: String,
        location: Location,
        creator: ObjectId,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            description,
            image,
            address,
            location,
            creator,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        Place::new(
            "Empire State".to_string(),
            "Tall building".to_string(),
            "uploads/images/empire.png".to_string(),
            "20 W 34th St, NYC".to_string(),
            Location {
                latitude: 40.748_54,
                longitude: -73.985_66,
            },
            ObjectId::new(),
        )
    }

    #[test]
    fn test_new_place_has_no_id_before_insert() {
        let place = sample_place();

        assert!(place.id.is_none());
        assert!(place.id_string().is_none());
    }

    #[test]
    fn test_new_place_timestamps_are_initialized_together() {
        let place = sample_place();

        assert_eq!(place.created_at, place.updated_at);
    }

    #[test]
    fn test_id_string_renders_hex() {
        let mut place = sample_place();
        let oid = ObjectId::new();
        place.id = Some(oid);

        assert_eq!(place.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_location_serializes_as_numeric_pair() {
        let location = Location {
            latitude: 37.5326,
            longitude: 127.0246,
        };

        let json = serde_json::to_value(&location).unwrap();

        assert_eq!(json["latitude"], 37.5326);
        assert_eq!(json["longitude"], 127.0246);
    }
}
