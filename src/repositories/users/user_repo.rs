//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! 장소 생성/삭제 시 소유 사용자의 `places` 목록을 같은 트랜잭션 안에서
//! 갱신해야 하므로, `ClientSession`을 받는 목록 갱신 연산을 제공합니다.

use std::any::Any;
use std::sync::Arc;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    ClientSession, Collection, IndexModel,
};
use crate::{
    core::registry::{RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::users::user::User,
};
use crate::errors::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
///
/// `users` 컬렉션에 대한 조회와, 트랜잭션 범위의 `places` 목록 갱신을
/// 담당합니다.
///
/// ## 에러 처리
///
/// - **StorageError**: 조회 실패, 잘못된 ObjectId 형식
/// - **TransactionFailed**: 세션 범위 목록 갱신 실패
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 의존성을 레지스트리에서 해결하여 새 인스턴스를 생성합니다.
    fn new() -> Self {
        Self {
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// `users` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection("users")
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::StorageError)` - 잘못된 ID 형식 또는 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::StorageError("유효하지 않은 사용자 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// 트랜잭션 세션 범위에서 사용자의 places 목록에 장소 추가
    ///
    /// 장소 생성의 이중 문서 쓰기 중 두 번째 단계입니다.
    /// `$push`는 삽입 순서를 유지합니다.
    pub async fn push_place(
        &self,
        user_id: &ObjectId,
        place_id: &ObjectId,
        session: &mut ClientSession,
    ) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "_id": user_id },
                doc! {
                    "$push": { "places": place_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .session(&mut *session)
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// 트랜잭션 세션 범위에서 사용자의 places 목록에서 장소 제거
    ///
    /// 장소 삭제의 이중 문서 쓰기 중 두 번째 단계입니다.
    pub async fn pull_place(
        &self,
        user_id: &ObjectId,
        place_id: &ObjectId,
        session: &mut ClientSession,
    ) -> Result<(), AppError> {
        self.collection()
            .update_one(
                doc! { "_id": user_id },
                doc! {
                    "$pull": { "places": place_id },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .session(&mut *session)
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지
    /// 2. **사용자명 유니크 인덱스**: 중복 사용자명 방지
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        // 사용자명 유니크 인덱스
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        Ok(())
    }
}

fn user_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(UserRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
    }
}
