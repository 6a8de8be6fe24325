//! # 지오코딩 서비스
//!
//! 외부 주소 검색 API를 통해 자유 형식 주소 문자열을 위경도 좌표로
//! 변환하는 기능을 제공합니다.
//!
//! ## 동작 방식
//!
//! ```text
//! ┌─────────────┐                       ┌──────────────────┐
//! │ PlaceService │                       │  지오코딩 제공자    │
//! └─────────────┘                       └──────────────────┘
//!        │                                        │
//!        │ resolve_coordinates("20 W 34th St")    │
//!        ├──────────────┐                         │
//!        │              │ GET /search?key=..&q=.. │
//!        │              ├────────────────────────►│
//!        │              │ [{ lat, lon, ... }]     │
//!        │              │◄────────────────────────┤
//!        │ Location { latitude, longitude }       │
//!        │◄─────────────┘                         │
//! ```
//!
//! ## 실패 처리
//!
//! 전송 오류, 비정상 상태 코드, 응답 파싱 실패, 빈 결과, 수치 변환 실패는
//! 모두 [`AppError::GeocodingFailed`]로 수렴합니다. 호출자는 원인과 무관하게
//! 장소 생성을 거부해야 하므로 하나의 에러 종류면 충분합니다.
//!
//! 캐싱, 재시도, 대체 제공자는 없습니다. 여기서의 실패는 장소 생성
//! 플로우 전체를 중단시킵니다.

use std::any::Any;
use std::sync::Arc;
use crate::{
    config::GeocodingConfig,
    core::registry::{ServiceLocator, ServiceRegistration},
    domain::entities::places::place::Location,
    domain::models::geo::geo_search_result::GeoSearchEntry,
};
use crate::errors::errors::AppError;

/// 지오코딩 서비스
///
/// 주소 문자열을 좌표로 변환하는 단일 아웃바운드 호출을 감쌉니다.
/// API 자격 증명은 생성 시점에 [`GeocodingConfig`]로 주입되며,
/// 호출 시점의 전역 환경 변수 조회는 하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use crate::services::geo::geocoding_service::GeocodingService;
///
/// let geocoding = GeocodingService::instance();
/// let location = geocoding.resolve_coordinates("20 W 34th St, NYC").await?;
/// println!("{}, {}", location.latitude, location.longitude);
/// ```
pub struct GeocodingService {
    /// 주입된 지오코딩 설정 (API 키, 검색 엔드포인트)
    config: GeocodingConfig,
}

impl GeocodingService {
    /// 주어진 설정으로 새 지오코딩 서비스를 생성합니다.
    pub fn new(config: GeocodingConfig) -> Self {
        Self { config }
    }

    /// 싱글톤 인스턴스를 가져옵니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get::<Self>()
    }

    /// 주소 문자열을 위경도 좌표로 변환
    ///
    /// 외부 주소 검색 API에 한 번의 GET 요청을 보내고,
    /// 첫 번째 검색 결과의 좌표를 수치로 변환하여 반환합니다.
    ///
    /// # 인자
    ///
    /// * `address` - 자유 형식 주소 문자열. 로컬에서 형식 검증은 하지
    ///   않으며, 해석 가능 여부는 외부 서비스가 판단합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Location)` - 첫 번째 검색 결과의 좌표
    /// * `Err(AppError::GeocodingFailed)` - 전송 오류, 비정상 응답,
    ///   빈 결과, 좌표 수치 변환 실패
    ///
    /// # 요청 형식
    ///
    /// ```text
    /// GET {search_url}?key=API_KEY&q=ENCODED_ADDRESS&format=json
    /// ```
    pub async fn resolve_coordinates(&self, address: &str) -> Result<Location, AppError> {
        let params = [
            ("key", self.config.api_key.as_str()),
            ("q", address),
            ("format", "json"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}?{}", self.config.search_url, query_string);

        let client = reqwest::Client::new();

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::GeocodingFailed(format!("지오코딩 요청 실패: {}", e)))?;

        // 제공자는 결과 없음을 비정상 상태 코드로 알리기도 합니다.
        if !response.status().is_success() {
            return Err(AppError::GeocodingFailed(
                "제공된 주소의 좌표를 찾을 수 없습니다".to_string(),
            ));
        }

        let results = response
            .json::<Vec<GeoSearchEntry>>()
            .await
            .map_err(|e| AppError::GeocodingFailed(format!("지오코딩 응답 파싱 실패: {}", e)))?;

        Self::location_from_results(&results)
    }

    /// 검색 결과 배열에서 첫 번째 항목의 좌표를 추출합니다.
    ///
    /// 제공자는 좌표를 문자열로 내려주므로 `f64`로 변환하며,
    /// 변환에 실패하면 지오코딩 실패로 취급합니다.
    fn location_from_results(results: &[GeoSearchEntry]) -> Result<Location, AppError> {
        let first = results.first().ok_or_else(|| {
            AppError::GeocodingFailed("제공된 주소에 대한 검색 결과가 없습니다".to_string())
        })?;

        let latitude = first.lat.parse::<f64>().map_err(|_| {
            AppError::GeocodingFailed(format!("위도 값을 해석할 수 없습니다: {}", first.lat))
        })?;

        let longitude = first.lon.parse::<f64>().map_err(|_| {
            AppError::GeocodingFailed(format!("경도 값을 해석할 수 없습니다: {}", first.lon))
        })?;

        Ok(Location {
            latitude,
            longitude,
        })
    }
}

fn geocoding_service_constructor() -> Box<dyn Any + Send + Sync> {
    Box::new(Arc::new(GeocodingService::new(GeocodingConfig::from_env())))
}

inventory::submit! {
    ServiceRegistration {
        name: "geocoding_service",
        constructor: geocoding_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lat: &str, lon: &str) -> GeoSearchEntry {
        GeoSearchEntry {
            lat: lat.to_string(),
            lon: lon.to_string(),
            display_name: None,
        }
    }

    #[test]
    fn test_first_result_is_extracted() {
        let results = vec![entry("40.74854", "-73.98566"), entry("1.0", "2.0")];

        let location = GeocodingService::location_from_results(&results).unwrap();

        assert_eq!(location.latitude, 40.74854);
        assert_eq!(location.longitude, -73.98566);
    }

    #[test]
    fn test_empty_results_fail_as_geocoding_error() {
        let error = GeocodingService::location_from_results(&[]).unwrap_err();

        assert!(matches!(error, AppError::GeocodingFailed(_)));
    }

    #[test]
    fn test_non_numeric_latitude_fails_as_geocoding_error() {
        let results = vec![entry("not-a-number", "-73.98566")];

        let error = GeocodingService::location_from_results(&results).unwrap_err();

        assert!(matches!(error, AppError::GeocodingFailed(_)));
    }

    #[test]
    fn test_non_numeric_longitude_fails_as_geocoding_error() {
        let results = vec![entry("40.74854", "east")];

        let error = GeocodingService::location_from_results(&results).unwrap_err();

        assert!(matches!(error, AppError::GeocodingFailed(_)));
    }

    #[test]
    fn test_provider_fixture_round_trip() {
        let body = r#"[
            {
                "lat": "37.5326",
                "lon": "127.0246",
                "display_name": "서울특별시 용산구"
            }
        ]"#;

        let results: Vec<GeoSearchEntry> = serde_json::from_str(body).unwrap();
        let location = GeocodingService::location_from_results(&results).unwrap();

        assert_eq!(location.latitude, 37.5326);
        assert_eq!(location.longitude, 127.0246);
    }
}
