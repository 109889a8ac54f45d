//! ID 토큰 검증 공통 타입
//!
//! 외부 ID 공급자가 발급한 토큰을 검증하는 [`IdTokenVerifier`] trait와
//! Bearer 헤더 파싱을 제공합니다.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthProvider;
use crate::domain::models::auth::VerifiedIdentity;

/// ID 토큰 검증 실패
///
/// 어떤 변형이든 클라이언트에는 `"Unauthorized: Invalid token."`으로만 보입니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("토큰이 만료되었습니다")]
    Expired,

    #[error("유효하지 않은 토큰: {0}")]
    Invalid(String),

    #[error("서명 키를 찾을 수 없습니다: {0}")]
    UnknownKey(String),

    #[error("서명 키 조회 실패: {0}")]
    KeyFetch(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        }
    }
}

/// 검증에 사용하는 ID 토큰 클레임
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdTokenClaims {
    /// 사용자 고유 ID
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub exp: i64,
}

impl IdTokenClaims {
    /// 빈 `sub`을 거부하고 검증된 호출자 정보로 변환합니다.
    pub fn into_identity(self, provider: AuthProvider) -> Result<VerifiedIdentity, TokenError> {
        if self.sub.trim().is_empty() {
            return Err(TokenError::Invalid("sub 클레임이 비어 있습니다".to_string()));
        }

        Ok(VerifiedIdentity {
            uid: self.sub,
            email: self.email,
            provider,
        })
    }
}

/// 외부 ID 토큰 검증기
///
/// 인증 미들웨어는 `web::Data<dyn IdTokenVerifier>`로 주입된 구현을 사용합니다.
#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, TokenError>;

    fn provider(&self) -> AuthProvider;
}

/// `Authorization` 헤더 값에서 토큰을 꺼냅니다.
///
/// `Bearer ` 접두사가 없으면 헤더 값 전체를 토큰으로 봅니다.
/// 결과가 비어 있으면 `None`입니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header).trim();

    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer_token("Bearer "), None);
        assert_eq!(extract_bearer_token("   "), None);
    }

    #[test]
    fn test_empty_subject_is_rejected() {
        let claims = IdTokenClaims {
            sub: " ".to_string(),
            email: None,
            exp: 0,
        };

        assert!(matches!(
            claims.into_identity(AuthProvider::Hmac),
            Err(TokenError::Invalid(_))
        ));
    }
}
