//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ApiError**: `{kind, message, status}`를 가진 단일 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 `{ code, message, status }` 응답 생성
//! - **ErrorContext**: 하위 계층 에러를 분류된 에러로 변환

pub mod errors;

pub use errors::*;
