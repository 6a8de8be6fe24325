//! 장소 요청 DTO 모듈

pub mod create_place_request;
pub mod update_place_request;

pub use create_place_request::CreatePlaceRequest;
pub use update_place_request::UpdatePlaceRequest;
