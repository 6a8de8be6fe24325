//! 장소 응답 DTO 모듈

pub mod place_response;

pub use place_response::{DeletePlaceResponse, PlaceResponse, PlacesResponse};
