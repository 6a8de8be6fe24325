//! 장소 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use crate::domain::entities::places::place::{Location, Place};

/// 장소 응답 DTO
///
/// 내부 `_id`(ObjectId)를 공개용 `id` 16진수 문자열로,
/// `creator` 참조 역시 문자열로 변환하여 노출합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub address: String,

    /// 지오코딩으로 확정된 좌표 (수치)
    pub location: Location,

    /// 소유 사용자 ID (16진수 문자열)
    pub creator: String,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Place> for PlaceResponse {
    fn from(place: Place) -> Self {
        let Place {
            id,
            title,
            description,
            image,
            address,
            location,
            creator,
            created_at,
            updated_at,
        } = place;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            description,
            image,
            address,
            location,
            creator: creator.to_hex(),
            created_at,
            updated_at,
        }
    }
}

/// 장소 목록 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesResponse {
    pub places: Vec<PlaceResponse>,
}

impl PlacesResponse {
    /// 엔티티 목록에서 응답 DTO 생성
    pub fn new(places: Vec<Place>) -> Self {
        Self {
            places: places.into_iter().map(PlaceResponse::from).collect(),
        }
    }
}

/// 장소 삭제 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePlaceResponse {
    pub message: String,
}

impl DeletePlaceResponse {
    /// 삭제 확인 메시지 생성
    pub fn deleted() -> Self {
        Self {
            message: "Deleted place.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn sample_place(id: Option<ObjectId>) -> Place {
        let mut place = Place::new(
            "Empire State".to_string(),
            "Tall building".to_string(),
            "uploads/images/empire.png".to_string(),
            "20 W 34th St, NYC".to_string(),
            Location {
                latitude: 40.748_54,
                longitude: -73.985_66,
            },
            ObjectId::new(),
        );
        place.id = id;
        place
    }

    #[test]
    fn test_internal_id_becomes_public_hex_id() {
        let oid = ObjectId::new();
        let response = PlaceResponse::from(sample_place(Some(oid)));

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(response.id.len(), 24);
    }

    #[test]
    fn test_creator_reference_is_rendered_as_string() {
        let place = sample_place(Some(ObjectId::new()));
        let creator = place.creator;

        let response = PlaceResponse::from(place);

        assert_eq!(response.creator, creator.to_hex());
    }

    #[test]
    fn test_content_fields_survive_mapping() {
        let response = PlaceResponse::from(sample_place(Some(ObjectId::new())));

        assert_eq!(response.title, "Empire State");
        assert_eq!(response.description, "Tall building");
        assert_eq!(response.address, "20 W 34th St, NYC");
        assert_eq!(response.location.latitude, 40.748_54);
        assert_eq!(response.location.longitude, -73.985_66);
    }

    #[test]
    fn test_places_response_wraps_all_entities() {
        let response = PlacesResponse::new(vec![
            sample_place(Some(ObjectId::new())),
            sample_place(Some(ObjectId::new())),
        ]);

        assert_eq!(response.places.len(), 2);
    }

    #[test]
    fn test_delete_response_message() {
        let response = DeletePlaceResponse::deleted();

        assert_eq!(response.message, "Deleted place.");
    }
}
