//! 지오코딩 연동 모델 모듈

pub mod geo_search_result;
