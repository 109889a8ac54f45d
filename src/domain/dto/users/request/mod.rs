//! 사용자 생성/수정 요청 본문

pub mod user_payload;

pub use user_payload::UserPayload;
