//! 사용자 엔티티와 검증 규칙

pub mod user;
pub mod validation;

pub use user::User;
pub use validation::{validate_user, ValidationResult};
