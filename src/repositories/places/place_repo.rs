//! # 장소 리포지토리 구현
//!
//! 장소 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB `places` 컬렉션에 대한 조회/쓰기 연산을 제공합니다.
//!
//! ## 특징
//!
//! - **세션 범위 쓰기**: 생성/삭제는 User 문서 갱신과 하나의 트랜잭션으로
//!   묶여야 하므로, `ClientSession`을 받는 쓰기 변형을 제공합니다
//! - **자동 의존성 주입**: 싱글톤 레지스트리를 통한 DI
//! - **인덱스 관리**: `creator` 조회 최적화 인덱스

use std::any::Any;
use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    options::IndexOptions,
    ClientSession, Collection, IndexModel,
};
use crate::{
    core::registry::{RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::places::place::Place,
};
use crate::errors::errors::AppError;

/// 장소 데이터 액세스 리포지토리
///
/// `places` 컬렉션의 CRUD 연산을 담당합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>`를 반환합니다:
///
/// - **StorageError**: MongoDB 연결/쿼리 오류, 잘못된 ObjectId 형식
/// - **TransactionFailed**: 세션 범위 쓰기 연산 실패 (호출 측에서
///   트랜잭션 전체를 중단시킵니다)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::repositories::places::place_repo::PlaceRepository;
///
/// let repo = PlaceRepository::instance();
/// let place = repo.find_by_id("66b2a1f9c4e7d3a8b1f02c4d").await?;
/// ```
pub struct PlaceRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl PlaceRepository {
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

    /// `places` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<Place> {
        self.db.get_database().collection("places")
    }

    /// ID로 장소 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Place))` - 장소를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 장소가 없는 경우
    /// * `Err(AppError::StorageError)` - 잘못된 ID 형식 또는 데이터베이스 오류
    ///
    /// 잘못된 형식의 식별자는 조회 자체의 실패로 취급합니다.
    /// 형식 오류와 연결 오류 모두 같은 에러 종류로 수렴합니다.
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Place>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::StorageError("유효하지 않은 장소 ID 형식입니다".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// 생성자(creator) 기준 장소 목록 조회
    ///
    /// 해당 사용자가 생성한 모든 장소를 반환합니다. 결과가 없으면
    /// 빈 벡터를 반환하며, "결과 없음"의 해석은 서비스 계층이 담당합니다.
    pub async fn find_by_creator(&self, creator: &ObjectId) -> Result<Vec<Place>, AppError> {
        let cursor = self.collection()
            .find(doc! { "creator": creator })
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// 트랜잭션 세션 범위에서 장소 삽입
    ///
    /// 장소 생성의 이중 문서 쓰기(Place 삽입 + User.places 갱신) 중
    /// 첫 번째 단계입니다. 실패 시 호출 측이 트랜잭션을 중단합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ObjectId)` - 삽입된 장소의 ID
    /// * `Err(AppError::TransactionFailed)` - 삽입 실패
    pub async fn insert_with_session(
        &self,
        place: &Place,
        session: &mut ClientSession,
    ) -> Result<ObjectId, AppError> {
        let result = self.collection()
            .insert_one(place)
            .session(&mut *session)
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::TransactionFailed("삽입된 장소 ID를 확인할 수 없습니다".to_string()))
    }

    /// 트랜잭션 세션 범위에서 장소 삭제
    ///
    /// 장소 삭제의 이중 문서 쓰기 중 첫 번째 단계입니다.
    pub async fn delete_with_session(
        &self,
        place_id: &ObjectId,
        session: &mut ClientSession,
    ) -> Result<(), AppError> {
        self.collection()
            .delete_one(doc! { "_id": place_id })
            .session(&mut *session)
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// 장소 제목/설명 수정
    ///
    /// `$set` 연산자로 지정된 필드만 변경하고, 갱신된 문서를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Place))` - 갱신된 장소
    /// * `Ok(None)` - 해당 ID의 장소가 존재하지 않음
    /// * `Err(AppError::StorageError)` - 데이터베이스 오류
    pub async fn update_content(
        &self,
        place_id: &str,
        title: &str,
        description: &str,
    ) -> Result<Option<Place>, AppError> {
        let object_id = ObjectId::parse_str(place_id)
            .map_err(|_| AppError::StorageError("유효하지 않은 장소 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "title": title,
                    "description": description,
                    "updated_at": DateTime::now(),
                } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **creator 인덱스**: 사용자별 장소 목록 조회 최적화
    /// 2. **created_at 내림차순 인덱스**: 최근 장소 조회 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection();

        // creator 조회 인덱스
        let creator_index = IndexModel::builder()
            .keys(doc! { "creator": 1 })
            .options(IndexOptions::builder()
                .name("creator_lookup".to_string())
                .build())
            .build();

        // 생성일 인덱스
        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([creator_index, created_at_index])
            .await
            .map_err(|e| AppError::StorageError(e.to_string()))?;

        Ok(())
    }
}

fn place_repository_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(PlaceRepository::new()))
}

inventory::submit! {
    RepositoryRegistration {
        name: "place_repository",
        constructor: place_repository_constructor,
    }
}
