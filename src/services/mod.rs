//! 서비스 계층 모듈
//!
//! 외부 ID 공급자 연동(토큰 검증)을 담당합니다.

pub mod auth;
