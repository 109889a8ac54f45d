//! # Authentication Configuration Module
//!
//! 외부 ID 토큰 검증기 설정을 관리합니다.
//! 운영 환경에서는 Firebase Authentication이 발급한 ID 토큰(RS256)을,
//! 로컬 개발과 테스트에서는 공유 비밀키로 서명된 HS256 토큰을 검증합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Firebase
//! ```bash
//! export AUTH_PROVIDER="firebase"
//! export FBASE_PROJECT_ID="your-firebase-project-id"
//! # 선택: 서명 키 JWK 엔드포인트 재정의
//! export FIREBASE_JWKS_URL="https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com"
//! ```
//!
//! ### HMAC
//! ```bash
//! export AUTH_PROVIDER="hmac"
//! export JWT_SECRET="your-shared-secret"
//! ```

use std::env;
use serde::{Deserialize, Serialize};
use super::ConfigError;

/// Firebase ID 토큰 서명 키(JWK) 공개 엔드포인트
pub const DEFAULT_FIREBASE_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

/// ID 토큰 발급자 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Firebase Authentication (RS256, Google 공개키)
    Firebase,
    /// 공유 비밀키 HS256 (개발/테스트용)
    Hmac,
}

impl AuthProvider {
    /// 문자열에서 AuthProvider를 생성합니다. (대소문자 무관)
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "firebase" => Ok(AuthProvider::Firebase),
            "hmac" | "hs256" => Ok(AuthProvider::Hmac),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Firebase => "firebase",
            AuthProvider::Hmac => "hmac",
        }
    }
}

/// ID 토큰 검증기 설정
///
/// 선택된 프로바이더에 필요한 값만 필수로 검사합니다.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityConfig {
    Firebase {
        project_id: String,
        jwks_url: String,
    },
    Hmac {
        secret: String,
    },
}

impl IdentityConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("AUTH_PROVIDER") {
            Some(value) => AuthProvider::from_str(&value).map_err(|_| ConfigError::Invalid {
                key: "AUTH_PROVIDER",
                value,
            })?,
            None => AuthProvider::Firebase,
        };

        let non_empty = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        match provider {
            AuthProvider::Firebase => Ok(IdentityConfig::Firebase {
                project_id: non_empty("FBASE_PROJECT_ID")?,
                jwks_url: lookup("FIREBASE_JWKS_URL")
                    .unwrap_or_else(|| DEFAULT_FIREBASE_JWKS_URL.to_string()),
            }),
            AuthProvider::Hmac => Ok(IdentityConfig::Hmac {
                secret: non_empty("JWT_SECRET")?,
            }),
        }
    }

    pub fn provider(&self) -> AuthProvider {
        match self {
            IdentityConfig::Firebase { .. } => AuthProvider::Firebase,
            IdentityConfig::Hmac { .. } => AuthProvider::Hmac,
        }
    }
}
