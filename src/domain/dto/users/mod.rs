//! 사용자 API 요청 DTO

pub mod request;
