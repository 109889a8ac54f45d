//! 인증 컨텍스트 모델

pub mod verified_identity;

pub use verified_identity::VerifiedIdentity;
