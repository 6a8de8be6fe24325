//! # Geocoding Configuration Module
//!
//! 외부 지오코딩(주소 검색) 서비스 연동에 필요한 설정을 관리하는 모듈입니다.
//!
//! API 키는 호출 시점에 전역으로 조회하지 않고, 애플리케이션 시작 시
//! 한 번 읽어 [`GeocodingService`](crate::services::geo::geocoding_service::GeocodingService)
//! 생성자에 주입합니다. 키가 누락된 경우 서비스 기동 단계에서 즉시 실패하여
//! 첫 요청에서야 오류가 드러나는 상황을 방지합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export GEOCODING_API_KEY="your-api-key"
//! ```
//!
//! ## 선택적 환경 변수
//!
//! ```bash
//! # 기본값: https://us1.locationiq.com/v1/search
//! export GEOCODING_SEARCH_URL="https://us1.locationiq.com/v1/search"
//! ```

use std::env;

/// 기본 주소 검색 엔드포인트
const DEFAULT_SEARCH_URL: &str = "https://us1.locationiq.com/v1/search";

/// 지오코딩 서비스 설정값
///
/// 외부 주소 검색 API 호출에 필요한 자격 증명과 엔드포인트를 담는
/// 값 구조체입니다. [`from_env`](Self::from_env)로 시작 시점에 한 번
/// 구성한 뒤 지오코딩 서비스에 주입하여 사용합니다.
#[derive(Debug, Clone)]
pub struct GeocodingConfig {
    /// 지오코딩 제공자 API 키
    pub api_key: String,
    /// 주소 검색 엔드포인트 URL
    pub search_url: String,
}

impl GeocodingConfig {
    /// 환경 변수에서 지오코딩 설정을 읽어 생성합니다.
    ///
    /// # Panics
    ///
    /// `GEOCODING_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    /// 필수 자격 증명이므로 기동 단계에서 실패하는 것이 의도된 동작입니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use crate::config::GeocodingConfig;
    ///
    /// let config = GeocodingConfig::from_env();
    /// let service = GeocodingService::new(config);
    /// ```
    pub fn from_env() -> Self {
        let api_key = env::var("GEOCODING_API_KEY")
            .expect("GEOCODING_API_KEY must be set");

        let search_url = env::var("GEOCODING_SEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        Self {
            api_key,
            search_url,
        }
    }

    /// 주어진 값으로 설정을 생성합니다. 테스트 및 수동 구성용입니다.
    pub fn new(api_key: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            search_url: search_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_config_construction() {
        let config = GeocodingConfig::new("test-key", "https://geo.example.com/search");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.search_url, "https://geo.example.com/search");
    }

    #[test]
    fn test_from_env_uses_default_search_url() {
        // SAFETY: 테스트 프로세스 내 환경 변수 조작
        unsafe {
            env::set_var("GEOCODING_API_KEY", "env-key");
            env::remove_var("GEOCODING_SEARCH_URL");
        }

        let config = GeocodingConfig::from_env();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.search_url, DEFAULT_SEARCH_URL);
    }
}
