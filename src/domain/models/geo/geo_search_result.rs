//! # 지오코딩 검색 결과 모델
//!
//! 외부 주소 검색 API의 응답을 역직렬화하기 위한 데이터 모델입니다.
//!
//! 제공자는 검색 결과를 배열로 반환하며, 각 항목의 좌표는 문자열로
//! 내려옵니다. 좌표의 수치 변환은
//! [`GeocodingService`](crate::services::geo::geocoding_service::GeocodingService)가
//! 담당합니다.
//!
//! ## 응답 예시
//!
//! ```json
//! [
//!   {
//!     "lat": "40.74854",
//!     "lon": "-73.98566",
//!     "display_name": "Empire State Building, 20, West 34th Street, ..."
//!   }
//! ]
//! ```

use serde::Deserialize;

/// 주소 검색 결과 항목
///
/// 제공자 응답 배열의 한 항목입니다. 첫 번째 항목의 `lat`/`lon`만
/// 좌표 확정에 사용됩니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoSearchEntry {
    /// 위도 (제공자 원문: 문자열)
    pub lat: String,
    /// 경도 (제공자 원문: 문자열)
    pub lon: String,
    /// 제공자가 정규화한 표시용 주소
    #[serde(default)]
    pub display_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_provider_response() {
        let body = r#"[
            {
                "lat": "40.74854",
                "lon": "-73.98566",
                "display_name": "Empire State Building, 20, West 34th Street"
            }
        ]"#;

        let results: Vec<GeoSearchEntry> = serde_json::from_str(body).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].lat, "40.74854");
        assert_eq!(results[0].lon, "-73.98566");
        assert!(results[0].display_name.as_deref().unwrap().starts_with("Empire"));
    }

    #[test]
    fn test_deserialize_tolerates_missing_display_name() {
        let body = r#"[{ "lat": "37.5326", "lon": "127.0246" }]"#;

        let results: Vec<GeoSearchEntry> = serde_json::from_str(body).unwrap();

        assert!(results[0].display_name.is_none());
    }

    #[test]
    fn test_deserialize_empty_result_array() {
        let results: Vec<GeoSearchEntry> = serde_json::from_str("[]").unwrap();

        assert!(results.is_empty());
    }
}
