//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 추출
//! - 주입된 `IdTokenVerifier`로 ID 토큰 검증
//! - 검증된 `VerifiedIdentity`를 request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 401로 즉시 응답
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use crate::middlewares::AuthMiddleware;
//!
//! #[post("", wrap = "AuthMiddleware::required()")]
//! async fn create_user(/* ... */) -> ApiResult<HttpResponse> { /* ... */ }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
