//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 문서 저장소, CORS 설정
//! - [`auth_config`] - ID 토큰 검증기(Firebase / HMAC) 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소 설정
//! export USER_STORE="mongodb"              # mongodb, memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="users_service_dev"
//! export USERS_COLLECTION="USERS"
//! export USERS_COLLECTION_PLACEHOLDER="true"
//!
//! # 인증 설정
//! export AUTH_PROVIDER="firebase"          # firebase, hmac
//! export FBASE_PROJECT_ID="my-project"
//! export JWT_SECRET="dev-only-secret"      # AUTH_PROVIDER=hmac 인 경우
//! ```
//!
//! 필수 값이 빠져 있으면 [`ConfigError`]를 반환하고 서버가 시작되지 않습니다.
//!
//! 각 설정 구조체는 `from_env()`와 함께 임의의 조회 함수를 받는
//! `from_lookup()`을 제공하므로, 테스트에서 프로세스 환경 변수를 건드리지 않습니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use thiserror::Error;

/// 설정 로드 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 필수 환경 변수 누락
    #[error("{0} must be set")]
    Missing(&'static str),

    /// 파싱할 수 없는 값
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// `"true"`, `"1"`, `"yes"`, `"on"` 계열의 불리언 환경 변수를 해석합니다.
pub(crate) fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("FLAG", "TRUE"), Ok(true));
        assert_eq!(parse_flag("FLAG", " 0 "), Ok(false));
        assert_eq!(
            parse_flag("FLAG", "maybe"),
            Err(ConfigError::Invalid { key: "FLAG", value: "maybe".to_string() })
        );
    }
}
