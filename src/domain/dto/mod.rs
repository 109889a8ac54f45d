//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청 본문을 정의합니다.
//! 응답은 [`User`](crate::domain::entities::users::User) 엔티티를 그대로 직렬화합니다.

pub mod users;
