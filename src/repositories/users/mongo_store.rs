//! MongoDB 기반 사용자 문서 저장소

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::Collection;

use crate::db::Database;
use super::store::{StoreError, StoredDocument, UserStore};

/// 단일 MongoDB 컬렉션에 사용자 문서를 저장합니다.
///
/// 새 문서의 `_id`는 ObjectId 16진 문자열로 생성합니다.
/// 외부에서 ObjectId 타입 `_id`로 넣은 문서도 같은 문자열 ID로 조회됩니다.
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<Document>,
}

impl MongoUserStore {
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection(collection_name),
        }
    }

    fn id_filter(id: &str) -> Document {
        match ObjectId::parse_str(id) {
            Ok(object_id) => doc! { "$or": [{ "_id": id }, { "_id": object_id }] },
            Err(_) => doc! { "_id": id },
        }
    }

    fn into_stored(mut document: Document) -> StoredDocument {
        let id = match document.remove("_id") {
            Some(Bson::String(id)) => id,
            Some(Bson::ObjectId(object_id)) => object_id.to_hex(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        StoredDocument { id, fields: document }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;

        Ok(document.map(Self::into_stored))
    }

    async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
        let documents: Vec<Document> = self.collection.find(doc! {}).await?.try_collect().await?;

        Ok(documents.into_iter().map(Self::into_stored).collect())
    }

    async fn add(&self, mut fields: Document) -> Result<String, StoreError> {
        let id = ObjectId::new().to_hex();
        fields.insert("_id", id.as_str());

        self.collection.insert_one(fields).await?;
        debug!("문서 추가: {}", id);

        Ok(id)
    }

    async fn merge(&self, id: &str, fields: Document) -> Result<(), StoreError> {
        if fields.is_empty() {
            return Ok(());
        }

        // upsert 없이: 일치하는 문서가 없으면 matched_count == 0
        let result = self
            .collection
            .update_one(Self::id_filter(id), doc! { "$set": fields })
            .await?;

        if result.matched_count == 0 {
            debug!("병합 대상 문서 없음: {}", id);
        }

        Ok(())
    }
}
