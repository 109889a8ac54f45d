//! 메모리 기반 사용자 문서 저장소
//!
//! 로컬 실행과 테스트용입니다. 프로세스가 종료되면 데이터가 사라집니다.

use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::Document;
use uuid::Uuid;

use super::store::{StoreError, StoredDocument, UserStore};

/// 삽입 순서를 유지하는 메모리 저장소
#[derive(Debug)]
pub struct InMemoryUserStore {
    documents: RwLock<Vec<StoredDocument>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }

    /// 미리 채워진 문서로 저장소를 만듭니다.
    pub fn with_documents(documents: Vec<StoredDocument>) -> Self {
        Self {
            documents: RwLock::new(documents),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Poisoned)?;

        Ok(documents.iter().find(|document| document.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let documents = self.documents.read().map_err(|_| StoreError::Poisoned)?;

        Ok(documents.clone())
    }

    async fn add(&self, fields: Document) -> Result<String, StoreError> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;

        let id = Uuid::new_v4().simple().to_string();
        documents.push(StoredDocument { id: id.clone(), fields });

        Ok(id)
    }

    async fn merge(&self, id: &str, fields: Document) -> Result<(), StoreError> {
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;

        // 없는 문서는 만들지 않는다
        if let Some(document) = documents.iter_mut().find(|document| document.id == id) {
            for (key, value) in fields {
                document.fields.insert(key, value);
            }
        }

        Ok(())
    }
}
