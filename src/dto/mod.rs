pub mod api_response;
pub mod booking_dto;
pub mod settlement_dto;

pub use api_response::*;
