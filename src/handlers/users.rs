//! 사용자 API 핸들러
//!
//! 경로/본문 파라미터를 꺼내 [`UserRepository`] 연산 하나를 호출하고,
//! 결과를 JSON으로 돌려줍니다. 에러는 리포지토리가 만든 [`ApiError`]를
//! 그대로 전파하며 응답 변환은 `ResponseError` 구현이 담당합니다.
//!
//! ## 엔드포인트
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/api/users` | - |
//! | GET | `/api/users/{user_id}` | - |
//! | POST | `/api/users` | 필수 |
//! | PUT | `/api/users/{user_id}` | 필수 |

use actix_web::http::StatusCode;
use actix_web::{get, post, put, web, HttpResponse};
use log::debug;

use crate::core::errors::{ApiError, ApiResult};
use crate::domain::dto::users::request::UserPayload;
use crate::domain::models::auth::VerifiedIdentity;
use crate::middlewares::AuthMiddleware;
use crate::repositories::users::UserRepository;

/// 경로의 사용자 ID가 비어 있으면 리포지토리 호출 전에 404로 거부합니다.
///
/// 공백 검사에만 trim을 쓰고, ID 자체는 받은 그대로 넘깁니다.
fn require_user_id(user_id: &str) -> ApiResult<&str> {
    if user_id.trim().is_empty() {
        return Err(user_id_not_found());
    }

    Ok(user_id)
}

fn user_id_not_found() -> ApiError {
    ApiError::other("User ID Not Found").with_status(StatusCode::NOT_FOUND)
}

/// 사용자 목록 조회
///
/// `GET /api/users`
///
/// ```bash
/// curl http://localhost:8080/api/users
/// ```
#[get("")]
pub async fn list_users(repo: web::Data<UserRepository>) -> ApiResult<HttpResponse> {
    let users = repo.get_all().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회
///
/// `GET /api/users/{user_id}`
///
/// 존재하지 않는 ID는 `500 ERRUSR004`로 응답합니다.
#[get("/{user_id}")]
pub async fn get_user(
    repo: web::Data<UserRepository>,
    user_id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user_id = require_user_id(&user_id)?;
    let user = repo.get_by_id(user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성
///
/// `POST /api/users`
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Authorization: Bearer $ID_TOKEN" \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Alice Smith","email":"a@b.com","address":"1 Main St"}'
/// ```
///
/// 성공 시 저장소가 할당한 `id`를 포함한 사용자를 `200 OK`로 반환합니다.
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create_user(
    repo: web::Data<UserRepository>,
    identity: VerifiedIdentity,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    debug!("사용자 생성 요청: uid {}", identity.uid);

    let user = repo.create(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정
///
/// `PUT /api/users/{user_id}`
///
/// 본문에 담긴 필드만 덮어씁니다. 본문의 `id`는 경로의 ID로 대체됩니다.
#[put("/{user_id}", wrap = "AuthMiddleware::required()")]
pub async fn update_user(
    repo: web::Data<UserRepository>,
    identity: VerifiedIdentity,
    user_id: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let user_id = require_user_id(&user_id)?;
    debug!("사용자 수정 요청: {} (uid {})", user_id, identity.uid);

    let user = repo.update(user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 경로에 사용자 ID가 없는 수정 요청
///
/// `PUT /api/users` → `404 "User ID Not Found"`
#[put("", wrap = "AuthMiddleware::required()")]
pub async fn update_user_without_id() -> ApiResult<HttpResponse> {
    Err(user_id_not_found())
}
