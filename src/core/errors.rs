//! # Application Error Handling System
//!
//! 사용자 API 전역에서 사용하는 통합 에러 타입입니다.
//! 리포지토리와 핸들러가 모두 [`ApiError`] 하나만 주고받으며,
//! `actix_web::ResponseError` 구현이 내부 실패를 HTTP 응답으로 바꾸는 유일한 지점입니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": "ERRUSR001",
//!   "message": "Invalid user data, Name is required.",
//!   "status": 400
//! }
//! ```
//!
//! ## 에러 코드 매핑
//!
//! | ErrorKind | code | HTTP Status |
//! |-----------|------|-------------|
//! | `InvalidUserData` | `ERRUSR001` | 400 Bad Request |
//! | `UserNotFound` | `ERRUSR002` | 404 Not Found |
//! | `FailedToUpdateUser` | `ERRUSR003` | 500 Internal Server Error |
//! | `FailedToCreateUser` | `ERRUSR003` | 500 Internal Server Error |
//! | `FailedToFetchUser` | `ERRUSR004` | 500 Internal Server Error |
//! | `FailedToFetchUsers` | `ERRUSR005` | 500 Internal Server Error |
//! | `Unauthorized` | `UNAUTHORIZED` | 401 Unauthorized |
//! | `Other` | `ERROR` | 500 (명시적 상태 코드 지정 가능) |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{ApiError, ErrorContext, ErrorKind};
//!
//! // 저장소 에러를 분류된 에러로 변환 (원본 원인은 로그로만 남김)
//! let documents = store.list().await.context(ErrorKind::FailedToFetchUsers)?;
//!
//! // 문자열 기반 임시 에러
//! return Err(ApiError::other("User ID Not Found").with_status(StatusCode::NOT_FOUND));
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

pub const NO_TOKEN_PROVIDED: &str = "Unauthorized: No token provided.";
pub const INVALID_TOKEN: &str = "Unauthorized: Invalid token.";

/// 에러 분류
///
/// 각 분류는 클라이언트에 노출되는 코드, 기본 메시지, 기본 HTTP 상태를 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 입력값 검증 실패 (400)
    InvalidUserData,
    /// 사용자 없음 (404)
    UserNotFound,
    /// 사용자 수정 실패 (500)
    FailedToUpdateUser,
    /// 사용자 생성 실패 (500)
    FailedToCreateUser,
    /// 단건 조회 실패 (500)
    FailedToFetchUser,
    /// 목록 조회 실패 (500)
    FailedToFetchUsers,
    /// 인증 실패 (401)
    Unauthorized,
    /// 분류되지 않은 문자열 에러
    Other,
}

impl ErrorKind {
    /// 클라이언트에 전달되는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUserData => "ERRUSR001",
            ErrorKind::UserNotFound => "ERRUSR002",
            ErrorKind::FailedToUpdateUser => "ERRUSR003",
            ErrorKind::FailedToCreateUser => "ERRUSR003",
            ErrorKind::FailedToFetchUser => "ERRUSR004",
            ErrorKind::FailedToFetchUsers => "ERRUSR005",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Other => "ERROR",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidUserData => "Invalid user data",
            ErrorKind::UserNotFound => "User not found",
            ErrorKind::FailedToUpdateUser => "Failed to update user",
            ErrorKind::FailedToCreateUser => "Failed to create user",
            ErrorKind::FailedToFetchUser => "Failed to fetch user",
            ErrorKind::FailedToFetchUsers => "Failed to fetch users",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Other => "Internal server error",
        }
    }

    pub fn default_status(&self) -> StatusCode {
        match self {
            ErrorKind::InvalidUserData => StatusCode::BAD_REQUEST,
            ErrorKind::UserNotFound => StatusCode::NOT_FOUND,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 애플리케이션 전역 에러 타입
///
/// `{kind, message, status}` 세 가지 정보를 생성 시점에 확정합니다.
/// 분류 코드는 `kind`에서, HTTP 상태는 `status`에서 가져옵니다.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    status: StatusCode,
}

impl ApiError {
    /// 분류의 기본 메시지와 상태로 에러를 생성합니다.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
            status: kind.default_status(),
        }
    }

    /// 분류는 유지하고 메시지만 지정합니다.
    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.default_status(),
        }
    }

    /// 문자열 기반 임시 에러 (`Other`, 500)
    pub fn other(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Other, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_message(ErrorKind::Unauthorized, message)
    }

    /// `Authorization` 헤더가 없거나 토큰이 비어 있는 경우
    pub fn no_token() -> Self {
        Self::unauthorized(NO_TOKEN_PROVIDED)
    }

    /// 토큰 검증 실패 (서명, 만료, audience/issuer 불일치 등)
    pub fn invalid_token() -> Self {
        Self::unauthorized(INVALID_TOKEN)
    }

    /// 검증 실패 메시지를 `"Invalid user data, <e1>, <e2>"` 형태로 합칩니다.
    pub fn invalid_user_data(errors: &[String]) -> Self {
        let message = std::iter::once(ErrorKind::InvalidUserData.default_message())
            .chain(errors.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(", ");

        Self::with_message(ErrorKind::InvalidUserData, message)
    }

    /// HTTP 상태를 명시적으로 지정합니다.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        ApiError::other(message)
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        ApiError::other(message)
    }
}

/// 직렬화용 응답 본문
#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
    status: u16,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    /// `{ code, message, status }` JSON 응답을 생성합니다.
    ///
    /// 핸들러는 에러 본문을 직접 만들지 않고 항상 이 구현을 거칩니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status).json(ErrorBody {
            code: self.code(),
            message: &self.message,
            status: self.status.as_u16(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type ApiResult<T> = Result<T, ApiError>;

/// 하위 계층 에러를 분류된 [`ApiError`]로 변환하는 확장 trait
///
/// 원본 에러는 서버 로그에만 남기고, 클라이언트에는 분류의 기본 메시지만 전달합니다.
///
/// ```rust,ignore
/// let user = store.get(id).await.context(ErrorKind::FailedToFetchUser)?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, kind: ErrorKind) -> ApiResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, kind: ErrorKind) -> ApiResult<T> {
        self.map_err(|e| {
            error!("{} ({}): {}", kind.default_message(), kind.code(), e);
            ApiError::new(kind)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_kind_status_mapping() {
        assert_eq!(ApiError::new(ErrorKind::InvalidUserData).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::new(ErrorKind::UserNotFound).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::new(ErrorKind::Unauthorized).status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::new(ErrorKind::FailedToFetchUsers).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_create_and_update_share_code() {
        assert_eq!(ErrorKind::FailedToCreateUser.code(), "ERRUSR003");
        assert_eq!(ErrorKind::FailedToUpdateUser.code(), "ERRUSR003");
    }

    #[test]
    fn test_string_errors_map_to_other() {
        let error: ApiError = "boom".into();

        assert_eq!(error.kind(), ErrorKind::Other);
        assert_eq!(error.code(), "ERROR");
        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.to_string(), "boom");
    }

    #[test]
    fn test_explicit_status_overrides_default() {
        let error = ApiError::other("User ID Not Found").with_status(StatusCode::NOT_FOUND);

        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.code(), "ERROR");
    }

    #[test]
    fn test_invalid_user_data_joins_messages() {
        let error = ApiError::invalid_user_data(&[
            "Name is required.".to_string(),
            "Address is required.".to_string(),
        ]);

        assert_eq!(
            error.message(),
            "Invalid user data, Name is required., Address is required."
        );
        assert_eq!(error.code(), "ERRUSR001");
    }

    #[test]
    fn test_error_context_uses_kind_default_message() {
        let result: Result<(), &str> = Err("connection reset");
        let error = result.context(ErrorKind::FailedToFetchUser).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::FailedToFetchUser);
        assert_eq!(error.message(), "Failed to fetch user");
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let response = ApiError::new(ErrorKind::UserNotFound).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "code": "ERRUSR002",
                "message": "User not found",
                "status": 404
            })
        );
    }
}
