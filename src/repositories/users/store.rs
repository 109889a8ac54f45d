//! 사용자 문서 저장소 추상화
//!
//! 리포지토리는 이 trait만 알고 있으며, 실제 저장소(MongoDB, 메모리)는
//! 시작 시점에 주입됩니다.

use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

/// 저장소 계층 에러. HTTP 응답으로 직접 노출되지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("{0}")]
    Backend(String),

    #[error("Store lock poisoned")]
    Poisoned,
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// 저장소 ID와 나머지 필드로 구성된 저장 문서
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: String,
    pub fields: Document,
}

/// 단일 컬렉션 문서 저장소
///
/// ID 조회, 전체 조회, ID 자동 생성 추가, ID 기준 병합 쓰기를 지원합니다.
/// 트랜잭션은 보장하지 않습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError>;

    /// 저장소 순회 순서대로 모든 문서를 반환합니다. placeholder 문서도 포함합니다.
    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError>;

    /// 새 문서를 추가하고 저장소가 생성한 ID를 반환합니다.
    async fn add(&self, fields: Document) -> Result<String, StoreError>;

    /// 전달된 필드만 기존 문서에 덮어씁니다.
    ///
    /// 문서가 없으면 아무것도 쓰지 않습니다 (upsert 아님).
    async fn merge(&self, id: &str, fields: Document) -> Result<(), StoreError>;
}
