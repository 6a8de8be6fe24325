//! # 장소 서비스
//!
//! 장소 CRUD의 비즈니스 로직을 담당하는 서비스입니다.
//!
//! ## 주요 책임
//!
//! 1. **조회**: 장소 단건/사용자별 목록 조회와 응답 DTO 매핑
//! 2. **생성**: 지오코딩 → 생성자 존재 확인 → Place 삽입 + User.places
//!    추가를 하나의 트랜잭션으로 수행
//! 3. **수정**: 제목/설명 변경 (주소, 좌표, 이미지, 생성자는 불변)
//! 4. **삭제**: Place 제거 + User.places 제거를 하나의 트랜잭션으로
//!    수행하고, 커밋 이후 이미지 파일을 best-effort 로 정리
//!
//! ## 트랜잭션 처리
//!
//! 생성/삭제의 이중 문서 쓰기는 `Place.creator ↔ User.places` 양방향
//! 일관성 불변식을 지켜야 합니다. 단계 중 하나라도 실패하면 세션을
//! 중단(abort)하여 부분 커밋 상태를 남기지 않으며, 커밋은 항상
//! await 하여 완료를 확인한 뒤에만 성공을 반환합니다.

use std::any::Any;
use std::sync::Arc;
use log::{info, warn};
use mongodb::{bson::oid::ObjectId, ClientSession};
use crate::{
    core::registry::{ServiceLocator, ServiceRegistration},
    db::Database,
    domain::dto::places::request::{CreatePlaceRequest, UpdatePlaceRequest},
    domain::dto::places::response::{DeletePlaceResponse, PlaceResponse, PlacesResponse},
    domain::entities::places::place::Place,
    repositories::places::place_repo::PlaceRepository,
    repositories::users::user_repo::UserRepository,
    services::geo::geocoding_service::GeocodingService,
    utils::image_storage::remove_image,
};
use crate::errors::errors::AppError;

/// 장소 서비스
///
/// 핸들러 계층과 리포지토리 계층 사이에서 장소 관련 비즈니스 규칙을
/// 수행합니다. 의존성은 레지스트리를 통해 주입됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::places::place_service::PlaceService;
///
/// let service = PlaceService::instance();
/// let place = service.get_place_by_id("66b2a1f9c4e7d3a8b1f02c4d").await?;
/// ```
pub struct PlaceService {
    /// 장소 리포지토리
    place_repo: Arc<PlaceRepository>,
    /// 사용자 리포지토리 (생성자 확인, places 목록 갱신)
    user_repo: Arc<UserRepository>,
    /// 지오코딩 서비스 (주소 → 좌표)
    geocoding_service: Arc<GeocodingService>,
    /// 트랜잭션 세션 발급용 데이터베이스 연결
    db: Arc<Database>,
}

impl PlaceService {
    /// 의존성을 레지스트리에서 해결하여 새 인스턴스를 생성합니다.
    fn new() -> Self {
        Self {
            place_repo: ServiceLocator::get::<PlaceRepository>(),
            user_repo: ServiceLocator::get::<UserRepository>(),
            geocoding_service: ServiceLocator::get::<GeocodingService>(),
            db: ServiceLocator::get::<Database>(),
        }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// ID로 장소 단건 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(PlaceResponse)` - 조회된 장소 (내부 `_id`는 공개 `id`로 변환)
    /// * `Err(AppError::NotFound)` - 해당 ID의 장소가 없는 경우
    /// * `Err(AppError::StorageError)` - 조회 실패
    pub async fn get_place_by_id(&self, place_id: &str) -> Result<PlaceResponse, AppError> {
        let place = self.place_repo.find_by_id(place_id).await?
            .ok_or_else(|| {
                AppError::NotFound("제공된 ID의 장소를 찾을 수 없습니다".to_string())
            })?;

        Ok(PlaceResponse::from(place))
    }

    /// 사용자별 장소 목록 조회
    ///
    /// 해당 사용자가 생성한 모든 장소를 반환합니다.
    ///
    /// 결과가 비어 있으면 404를 반환합니다. "장소가 없는 사용자"와
    /// "존재하지 않는 사용자"는 구분하지 않습니다. 둘을 구분하려면 요청마다
    /// 사용자 조회가 한 번 더 필요한데, 기존 클라이언트가 의존하는 공개
    /// 계약을 바꿀 이유가 아직 없습니다.
    pub async fn get_places_by_user_id(&self, user_id: &str) -> Result<PlacesResponse, AppError> {
        let creator = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::StorageError("유효하지 않은 사용자 ID 형식입니다".to_string()))?;

        let places = self.place_repo.find_by_creator(&creator).await?;

        if places.is_empty() {
            return Err(AppError::NotFound(
                "제공된 사용자 ID의 장소를 찾을 수 없습니다".to_string(),
            ));
        }

        Ok(PlacesResponse::new(places))
    }

    /// 새 장소 생성
    ///
    /// # 처리 단계
    ///
    /// 1. 주소를 지오코딩하여 좌표 확정 (실패 시 그대로 전파)
    /// 2. 생성자 사용자 존재 확인
    /// 3. 트랜잭션: Place 삽입 + User.places 에 ID 추가 + 커밋
    ///
    /// # 반환값
    ///
    /// * `Ok(PlaceResponse)` - 생성된 장소 (ID 포함)
    /// * `Err(AppError::GeocodingFailed)` - 주소를 좌표로 변환하지 못함
    /// * `Err(AppError::ValidationError)` - 생성자 사용자가 존재하지 않음
    /// * `Err(AppError::StorageError)` - 사용자 조회 실패
    /// * `Err(AppError::TransactionFailed)` - 이중 문서 쓰기 실패
    pub async fn create_place(&self, request: CreatePlaceRequest) -> Result<PlaceResponse, AppError> {
        // 1. 주소 → 좌표
        let location = self.geocoding_service
            .resolve_coordinates(&request.address)
            .await?;

        // 2. 생성자 존재 확인
        //
        // 존재하지 않는 생성자는 서버 장애가 아니라 클라이언트 입력 문제이므로
        // 422로 응답합니다.
        let user = self.user_repo.find_by_id(&request.creator).await?
            .ok_or_else(|| {
                AppError::ValidationError("제공된 ID의 사용자를 찾을 수 없습니다".to_string())
            })?;

        let creator_id = user.id.ok_or_else(|| {
            AppError::StorageError("저장된 사용자 문서에 ID가 없습니다".to_string())
        })?;

        let mut place = Place::new(
            request.title,
            request.description,
            request.image,
            request.address,
            location,
            creator_id,
        );

        // 3. 이중 문서 쓰기 트랜잭션
        let mut session = self.start_transaction().await?;

        let outcome = async {
            let place_id = self.place_repo
                .insert_with_session(&place, &mut session)
                .await?;

            self.user_repo
                .push_place(&creator_id, &place_id, &mut session)
                .await?;

            Ok::<ObjectId, AppError>(place_id)
        }
        .await;

        let place_id = match outcome {
            Ok(place_id) => {
                // 커밋은 반드시 await 하여 완료를 확인
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::TransactionFailed(e.to_string()))?;
                place_id
            }
            Err(e) => {
                self.abort_transaction(&mut session).await;
                return Err(e);
            }
        };

        place.id = Some(place_id);

        info!("🆕 장소 생성 완료: {} (creator: {})", place_id.to_hex(), creator_id.to_hex());

        Ok(PlaceResponse::from(place))
    }

    /// 장소 제목/설명 수정
    ///
    /// # 반환값
    ///
    /// * `Ok(PlaceResponse)` - 갱신된 장소
    /// * `Err(AppError::NotFound)` - 해당 ID의 장소가 없는 경우
    /// * `Err(AppError::StorageError)` - 조회 또는 저장 실패
    pub async fn update_place(
        &self,
        place_id: &str,
        request: UpdatePlaceRequest,
    ) -> Result<PlaceResponse, AppError> {
        // 존재하지 않는 장소를 수정하려는 요청은 404
        let existing = self.place_repo.find_by_id(place_id).await?;
        if existing.is_none() {
            return Err(AppError::NotFound(
                "수정할 장소를 찾을 수 없습니다".to_string(),
            ));
        }

        let updated = self.place_repo
            .update_content(place_id, &request.title, &request.description)
            .await?
            // 조회와 갱신 사이에 삭제된 경우
            .ok_or_else(|| {
                AppError::NotFound("수정할 장소를 찾을 수 없습니다".to_string())
            })?;

        Ok(PlaceResponse::from(updated))
    }

    /// 장소 삭제
    ///
    /// # 처리 단계
    ///
    /// 1. 장소 조회 (소유자 참조 포함)
    /// 2. 트랜잭션: Place 삭제 + User.places 에서 ID 제거 + 커밋
    /// 3. 커밋 이후 이미지 파일 best-effort 정리 (실패는 로그만 남김)
    ///
    /// # 반환값
    ///
    /// * `Ok(DeletePlaceResponse)` - 삭제 확인 메시지
    /// * `Err(AppError::NotFound)` - 해당 ID의 장소가 없는 경우
    /// * `Err(AppError::StorageError)` - 조회 실패
    /// * `Err(AppError::TransactionFailed)` - 이중 문서 쓰기 실패
    pub async fn delete_place(&self, place_id: &str) -> Result<DeletePlaceResponse, AppError> {
        let place = self.place_repo.find_by_id(place_id).await?
            .ok_or_else(|| {
                AppError::NotFound("삭제할 장소를 찾을 수 없습니다".to_string())
            })?;

        let place_oid = place.id.ok_or_else(|| {
            AppError::StorageError("저장된 장소 문서에 ID가 없습니다".to_string())
        })?;

        let mut session = self.start_transaction().await?;

        let outcome = async {
            self.place_repo
                .delete_with_session(&place_oid, &mut session)
                .await?;

            self.user_repo
                .pull_place(&place.creator, &place_oid, &mut session)
                .await?;

            Ok::<(), AppError>(())
        }
        .await;

        match outcome {
            Ok(()) => {
                // 커밋은 반드시 await 하여 완료를 확인
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::TransactionFailed(e.to_string()))?;
            }
            Err(e) => {
                self.abort_transaction(&mut session).await;
                return Err(e);
            }
        }

        // 이미지 정리는 트랜잭션 보장의 일부가 아님
        remove_image(&place.image).await;

        info!("🗑️ 장소 삭제 완료: {} (creator: {})", place_oid.to_hex(), place.creator.to_hex());

        Ok(DeletePlaceResponse::deleted())
    }

    /// 새 트랜잭션 세션을 시작합니다.
    async fn start_transaction(&self) -> Result<ClientSession, AppError> {
        let mut session = self.db.client()
            .start_session()
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        session
            .start_transaction()
            .await
            .map_err(|e| AppError::TransactionFailed(e.to_string()))?;

        Ok(session)
    }

    /// 트랜잭션을 중단합니다. 중단 실패는 로그만 남깁니다.
    async fn abort_transaction(&self, session: &mut ClientSession) {
        if let Err(e) = session.abort_transaction().await {
            warn!("트랜잭션 중단 실패: {}", e);
        }
    }
}

fn place_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(PlaceService::new()))
}

inventory::submit! {
    ServiceRegistration {
        name: "place_service",
        constructor: place_service_constructor,
    }
}
