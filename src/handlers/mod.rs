//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - Bearer 토큰 검증                 ← Auth
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 검증 + 데이터 접근               ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   UserStore - MongoDB / 메모리                    ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 규칙
//!
//! - 핸들러는 검증하지 않습니다. 입력 검증은 리포지토리 경계에서 일어납니다.
//! - 모든 핸들러는 `ApiResult<HttpResponse>`를 반환하며, 에러 본문은
//!   `ApiError`의 `ResponseError` 구현이 `{ code, message, status }`로 만듭니다.
//! - 리포지토리는 `web::Data<UserRepository>`로 주입됩니다.

pub mod users;
