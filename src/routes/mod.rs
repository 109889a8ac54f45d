//! API 라우트 설정 모듈
//!
//! 사용자 API와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Auth Middleware Usage
//!
//! 읽기 라우트는 공개, 쓰기 라우트는 핸들러 단위로 인증을 요구합니다:
//!
//! ```rust,ignore
//! #[post("", wrap = "AuthMiddleware::required()")]
//! pub async fn create_user(/* ... */) -> ApiResult<HttpResponse> { /* ... */ }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_repository))
//!     .app_data(web::Data::from(verifier))
//!     .configure(configure_all_routes);
//! ```

use crate::core::errors::ApiError;
use crate::handlers;
use actix_web::http::StatusCode;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 `{ code, message, status }` 형식(400)으로 응답하도록
/// `JsonConfig` 에러 핸들러를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 파싱 실패: {}", err);
        ApiError::other(err.to_string())
            .with_status(StatusCode::BAD_REQUEST)
            .into()
    })
}

/// 사용자 관련 라우트를 설정합니다
///
/// ## Public 라우트
/// - `GET /api/users` - 사용자 목록
/// - `GET /api/users/{user_id}` - 사용자 조회
///
/// ## Protected 라우트 (Bearer 토큰 필요)
/// - `POST /api/users` - 사용자 생성
/// - `PUT /api/users/{user_id}` - 사용자 수정
///
/// 끝의 `/`는 `NormalizePath::trim()`이 제거하므로 `/api/users/`도 같은 라우트입니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::update_user_without_id)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "users_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
