//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::StoreConfig;
//! use crate::db::Database;
//!
//! let config = StoreConfig::from_env()?;
//! let database = Database::connect(&config).await?;
//! let users = database.collection(&config.collection_name);
//! ```

use mongodb::bson::{doc, Document};
use mongodb::{options::ClientOptions, Client, Collection};
use log::info;
use crate::config::StoreConfig;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트는 내부적으로 연결 풀을 가지므로 복제 비용이 작습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 연결 URI를 파싱해 클라이언트를 만들고 `ping` 명령으로 연결 상태를 검증합니다.
    pub async fn connect(config: &StoreConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;

        // 애플리케이션 이름 설정 (서버 측 모니터링용)
        client_options.app_name = Some("users_service".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 스키마 없는 문서 컬렉션 핸들을 반환합니다.
    pub fn collection(&self, name: &str) -> Collection<Document> {
        self.get_database().collection::<Document>(name)
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
