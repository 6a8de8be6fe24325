//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 사용자가 소유한 장소들의 참조 목록을 함께 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 장소의 소유자를 표현하는 도메인 엔티티입니다.
/// `places` 목록은 삽입 순서를 유지하며 소속 확인 용도로만 사용됩니다.
/// 하나의 장소 ID는 정확히 한 사용자의 `places`에만 나타나야 하며,
/// 이 불변식은 장소 생성/삭제 트랜잭션이 유지합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 사용자 이름 (unique)
    pub username: String,
    /// 소유한 장소 참조 목록 (삽입 순서 유지)
    pub places: Vec<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    ///
    /// 소유 장소가 없는 상태로 시작합니다.
    pub fn new(email: String, username: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            username,
            places: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 지정된 장소를 소유하고 있는지 확인
    pub fn owns_place(&self, place_id: &ObjectId) -> bool {
        self.places.contains(place_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_starts_with_empty_places() {
        let user = User::new("alice@example.com".to_string(), "alice".to_string());

        assert!(user.places.is_empty());
        assert!(user.id.is_none());
    }

    #[test]
    fn test_owns_place_checks_membership() {
        let mut user = User::new("bob@example.com".to_string(), "bob".to_string());
        let owned = ObjectId::new();
        let other = ObjectId::new();

        user.places.push(owned);

        assert!(user.owns_place(&owned));
        assert!(!user.owns_place(&other));
    }
}
