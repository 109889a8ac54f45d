//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 문서 저장소, CORS 관련 설정을 관리합니다.

use std::env;
use super::{parse_flag, ConfigError};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT")
                .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string())),
        )
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 워커 스레드 수. 기본값: 4
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|workers| *workers > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 사용자 문서 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB 컬렉션
    MongoDb,
    /// 프로세스 메모리 (로컬 실행 및 테스트용)
    InMemory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDb),
            "memory" | "in_memory" | "inmemory" => Ok(StoreBackend::InMemory),
            _ => Err(ConfigError::Invalid {
                key: "USER_STORE",
                value: s.to_string(),
            }),
        }
    }
}

/// 문서 저장소 설정
///
/// ## 환경 변수
/// - `USER_STORE`: `mongodb` (기본값) 또는 `memory`
/// - `MONGODB_URI`: 기본값 "mongodb://localhost:27017"
/// - `DATABASE_NAME`: 기본값 "users_service_dev"
/// - `USERS_COLLECTION`: 기본값 "USERS"
/// - `USERS_COLLECTION_PLACEHOLDER`: 빈 컬렉션 조회 시 placeholder 문서 기록 여부 (기본값 true)
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub placeholder_on_empty: bool,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("USER_STORE") {
            Some(value) => StoreBackend::from_str(&value)?,
            None => StoreBackend::MongoDb,
        };

        let placeholder_on_empty = match lookup("USERS_COLLECTION_PLACEHOLDER") {
            Some(value) => parse_flag("USERS_COLLECTION_PLACEHOLDER", &value)?,
            None => true,
        };

        Ok(Self {
            backend,
            mongodb_uri: lookup("MONGODB_URI")
                .unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME")
                .unwrap_or_else(|| "users_service_dev".to_string()),
            collection_name: lookup("USERS_COLLECTION").unwrap_or_else(|| "USERS".to_string()),
            placeholder_on_empty,
        })
    }
}

/// CORS 허용 Origin 설정
pub struct CorsConfig;

impl CorsConfig {
    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분). 비어 있으면 모든 Origin을 허용합니다.
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_store_config_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.backend, StoreBackend::MongoDb);
        assert_eq!(config.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(config.collection_name, "USERS");
        assert!(config.placeholder_on_empty);
    }

    #[test]
    fn test_store_config_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("USER_STORE", "memory"),
            ("USERS_COLLECTION", "people"),
            ("USERS_COLLECTION_PLACEHOLDER", "false"),
        ]))
        .unwrap();

        assert_eq!(config.backend, StoreBackend::InMemory);
        assert_eq!(config.collection_name, "people");
        assert!(!config.placeholder_on_empty);
    }

    #[test]
    fn test_store_config_rejects_unknown_backend() {
        let result = StoreConfig::from_lookup(lookup_from(&[("USER_STORE", "firestore")]));

        assert_eq!(
            result,
            Err(ConfigError::Invalid { key: "USER_STORE", value: "firestore".to_string() })
        );
    }

    #[test]
    fn test_cors_origins_parsing() {
        assert_eq!(
            CorsConfig::parse_origins(" http://localhost:3000, ,https://app.example.com"),
            vec!["http://localhost:3000".to_string(), "https://app.example.com".to_string()]
        );
        assert!(CorsConfig::parse_origins("").is_empty());
    }
}
