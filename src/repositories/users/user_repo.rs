//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 조회/생성/수정을 담당합니다.
//!
//! ## 특징
//!
//! - **쓰기 전 검증**: 생성과 수정은 저장소 I/O 전에 입력을 검증합니다.
//! - **에러 분류**: 저장소 에러는 로그에 남기고 분류된 [`ApiError`]로 변환합니다.
//! - **placeholder 문서**: 빈 컬렉션을 조회하면 placeholder 문서를 하나 기록합니다.
//!   placeholder는 결과에 포함되지 않으며 단건 조회/수정에서는 없는 문서로 취급됩니다.

use std::sync::Arc;

use log::{error, info, warn};

use crate::core::errors::{ApiError, ApiResult, ErrorContext, ErrorKind};
use crate::domain::dto::users::request::UserPayload;
use crate::domain::entities::users::user::{is_placeholder, placeholder_document};
use crate::domain::entities::users::{validate_user, User};
use super::store::{StoreError, StoredDocument, UserStore};

/// 사용자 데이터 액세스 리포지토리
///
/// 저장소는 `Arc<dyn UserStore>`로 주입되며, 리포지토리는 `web::Data`로
/// 핸들러에 공유됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store = Arc::new(InMemoryUserStore::new());
/// let repo = UserRepository::new(store);
///
/// let created = repo.create(payload).await?;
/// let found = repo.get_by_id(&created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn UserStore>,
    placeholder_on_empty: bool,
}

impl UserRepository {
    /// placeholder 기록이 켜진 리포지토리를 만듭니다.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self::with_placeholder(store, true)
    }

    pub fn with_placeholder(store: Arc<dyn UserStore>, placeholder_on_empty: bool) -> Self {
        Self {
            store,
            placeholder_on_empty,
        }
    }

    /// 모든 사용자를 저장소 순회 순서대로 조회합니다.
    ///
    /// 컬렉션에 문서가 하나도 없으면 placeholder 문서를 기록하고 빈 목록을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `FailedToFetchUsers` - 조회 또는 placeholder 기록 실패
    pub async fn get_all(&self) -> ApiResult<Vec<User>> {
        let documents = self.store.list().await.context(ErrorKind::FailedToFetchUsers)?;

        if documents.is_empty() && self.placeholder_on_empty {
            self.store
                .add(placeholder_document())
                .await
                .context(ErrorKind::FailedToFetchUsers)?;
            info!("빈 사용자 컬렉션에 placeholder 문서 기록");
            return Ok(Vec::new());
        }

        Ok(documents
            .iter()
            .filter(|document| !is_placeholder(&document.fields))
            .map(to_user)
            .collect())
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `FailedToFetchUser` - 조회 실패, 또는 문서가 없는 경우
    pub async fn get_by_id(&self, id: &str) -> ApiResult<User> {
        let document = self.store.get(id).await.context(ErrorKind::FailedToFetchUser)?;

        match live(document) {
            Some(document) => Ok(to_user(&document)),
            None => {
                warn!("사용자 없음: {}", id);
                Err(ApiError::new(ErrorKind::FailedToFetchUser))
            }
        }
    }

    /// 새 사용자를 생성합니다. ID는 저장소가 할당합니다.
    ///
    /// # Errors
    ///
    /// * `InvalidUserData` - 검증 실패 (저장소 호출 없음)
    /// * `FailedToCreateUser` - 저장소 실패, 하위 에러 메시지를 그대로 전달
    pub async fn create(&self, payload: UserPayload) -> ApiResult<User> {
        let validation = validate_user(&payload);
        if !validation.is_valid {
            return Err(ApiError::invalid_user_data(&validation.errors));
        }

        let fields = payload.to_document();
        let id = self.store.add(fields.clone()).await.map_err(create_failed)?;

        let stored = self.store.get(&id).await.map_err(create_failed)?;
        let user = match stored {
            Some(document) => to_user(&document),
            None => User::from_document(id, &fields),
        };

        info!("사용자 생성: {}", user.id);
        Ok(user)
    }

    /// 전달된 필드만 기존 사용자에 병합합니다.
    ///
    /// `id`는 항상 경로에서 받은 값으로 대체한 뒤 검증합니다.
    ///
    /// # Errors
    ///
    /// * `InvalidUserData` - 검증 실패 (저장소 호출 없음)
    /// * `UserNotFound` - 해당 ID의 사용자가 없음
    /// * `FailedToUpdateUser` - 존재 확인, 쓰기, 재조회 중 저장소 실패
    pub async fn update(&self, id: &str, payload: UserPayload) -> ApiResult<User> {
        let candidate = payload.with_id(id);

        let validation = validate_user(&candidate);
        if !validation.is_valid {
            return Err(ApiError::invalid_user_data(&validation.errors));
        }

        let existing = self.store.get(id).await.context(ErrorKind::FailedToUpdateUser)?;
        if live(existing).is_none() {
            warn!("수정 대상 사용자 없음: {}", id);
            return Err(ApiError::new(ErrorKind::UserNotFound));
        }

        self.store
            .merge(id, candidate.to_document())
            .await
            .context(ErrorKind::FailedToUpdateUser)?;

        let updated = self
            .store
            .get(id)
            .await
            .context(ErrorKind::FailedToUpdateUser)?
            .ok_or_else(|| ApiError::new(ErrorKind::FailedToUpdateUser))?;

        info!("사용자 수정: {}", id);
        Ok(to_user(&updated))
    }
}

fn live(document: Option<StoredDocument>) -> Option<StoredDocument> {
    document.filter(|document| !is_placeholder(&document.fields))
}

fn to_user(document: &StoredDocument) -> User {
    User::from_document(document.id.as_str(), &document.fields)
}

fn create_failed(e: StoreError) -> ApiError {
    let kind = ErrorKind::FailedToCreateUser;
    error!("{} ({}): {}", kind.default_message(), kind.code(), e);

    let message = e.to_string();
    if message.is_empty() {
        ApiError::new(kind)
    } else {
        ApiError::with_message(kind, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use actix_web::http::StatusCode;
    use async_trait::async_trait;
    use mongodb::bson::{doc, Document};
    use crate::repositories::users::in_memory_store::InMemoryUserStore;

    /// 쓰기 호출 횟수를 세는 저장소 래퍼
    #[derive(Default)]
    struct RecordingStore {
        inner: InMemoryUserStore,
        writes: AtomicUsize,
    }

    impl RecordingStore {
        fn with_documents(documents: Vec<StoredDocument>) -> Self {
            Self {
                inner: InMemoryUserStore::with_documents(documents),
                writes: AtomicUsize::new(0),
            }
        }

        fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl UserStore for RecordingStore {
        async fn get(&self, id: &str) -> Result<Option<StoredDocument>, StoreError> {
            self.inner.get(id).await
        }

        async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
            self.inner.list().await
        }

        async fn add(&self, fields: Document) -> Result<String, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.add(fields).await
        }

        async fn merge(&self, id: &str, fields: Document) -> Result<(), StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.inner.merge(id, fields).await
        }
    }

    /// 모든 호출이 실패하는 저장소
    struct FailingStore(&'static str);

    #[async_trait]
    impl UserStore for FailingStore {
        async fn get(&self, _id: &str) -> Result<Option<StoredDocument>, StoreError> {
            Err(StoreError::Backend(self.0.to_string()))
        }

        async fn list(&self) -> Result<Vec<StoredDocument>, StoreError> {
            Err(StoreError::Backend(self.0.to_string()))
        }

        async fn add(&self, _fields: Document) -> Result<String, StoreError> {
            Err(StoreError::Backend(self.0.to_string()))
        }

        async fn merge(&self, _id: &str, _fields: Document) -> Result<(), StoreError> {
            Err(StoreError::Backend(self.0.to_string()))
        }
    }

    fn alice() -> UserPayload {
        UserPayload {
            id: None,
            name: Some("Alice Smith".to_string()),
            email: Some("a@b.com".to_string()),
            address: Some("1 Main St".to_string()),
        }
    }

    fn stored_alice(id: &str) -> StoredDocument {
        StoredDocument {
            id: id.to_string(),
            fields: doc! { "name": "Alice Smith", "email": "a@b.com", "address": "1 Main St" },
        }
    }

    #[actix_web::test]
    async fn test_create_returns_user_with_generated_id() {
        let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));

        let user = repo.create(alice()).await.unwrap();

        assert!(!user.id.is_empty());
        assert_eq!(user.name, "Alice Smith");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.address, "1 Main St");
        assert_eq!(repo.get_by_id(&user.id).await.unwrap(), user);
    }

    #[actix_web::test]
    async fn test_create_with_invalid_data_never_writes() {
        let store = Arc::new(RecordingStore::default());
        let repo = UserRepository::new(store.clone());

        let err = repo
            .create(UserPayload {
                name: Some("Al".to_string()),
                email: Some("not-an-email".to_string()),
                ..alice()
            })
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidUserData);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message(),
            "Invalid user data, Name must be between 3 and 50 characters long., Invalid email format"
        );
        assert_eq!(store.writes(), 0);
    }

    #[actix_web::test]
    async fn test_create_forwards_store_message() {
        let repo = UserRepository::new(Arc::new(FailingStore("connection reset")));

        let err = repo.create(alice()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedToCreateUser);
        assert_eq!(err.message(), "connection reset");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_create_uses_default_message_for_empty_store_error() {
        let repo = UserRepository::new(Arc::new(FailingStore("")));

        let err = repo.create(alice()).await.unwrap_err();

        assert_eq!(err.message(), "Failed to create user");
        assert_eq!(err.code(), "ERRUSR003");
    }

    #[actix_web::test]
    async fn test_get_all_on_empty_collection_writes_one_placeholder() {
        let store = Arc::new(RecordingStore::default());
        let repo = UserRepository::new(store.clone());

        assert!(repo.get_all().await.unwrap().is_empty());
        assert!(repo.get_all().await.unwrap().is_empty());

        assert_eq!(store.writes(), 1);
        let documents = store.list().await.unwrap();
        assert_eq!(documents.len(), 1);
        assert!(is_placeholder(&documents[0].fields));
    }

    #[actix_web::test]
    async fn test_get_all_without_placeholder_capability() {
        let store = Arc::new(RecordingStore::default());
        let repo = UserRepository::with_placeholder(store.clone(), false);

        assert!(repo.get_all().await.unwrap().is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[actix_web::test]
    async fn test_get_all_excludes_placeholder() {
        let store = Arc::new(InMemoryUserStore::with_documents(vec![
            StoredDocument { id: "p".to_string(), fields: placeholder_document() },
            stored_alice("u1"),
        ]));
        let repo = UserRepository::new(store);

        let users = repo.get_all().await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, "u1");
    }

    #[actix_web::test]
    async fn test_get_all_store_failure() {
        let repo = UserRepository::new(Arc::new(FailingStore("down")));

        let err = repo.get_all().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedToFetchUsers);
        assert_eq!(err.message(), "Failed to fetch users");
    }

    #[actix_web::test]
    async fn test_get_by_id_missing_is_fetch_failure() {
        let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));

        let err = repo.get_by_id("does-not-exist").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedToFetchUser);
        assert_eq!(err.code(), "ERRUSR004");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_get_by_id_treats_placeholder_as_missing() {
        let store = Arc::new(InMemoryUserStore::with_documents(vec![StoredDocument {
            id: "p".to_string(),
            fields: placeholder_document(),
        }]));
        let repo = UserRepository::new(store);

        assert_eq!(repo.get_by_id("p").await.unwrap_err().kind(), ErrorKind::FailedToFetchUser);
    }

    #[actix_web::test]
    async fn test_update_merges_supplied_fields() {
        let store = Arc::new(InMemoryUserStore::with_documents(vec![stored_alice("u1")]));
        let repo = UserRepository::new(store.clone());

        let updated = repo
            .update(
                "u1",
                UserPayload {
                    address: Some("2 Side St".to_string()),
                    ..alice()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "u1");
        assert_eq!(updated.address, "2 Side St");
        assert_eq!(updated.name, "Alice Smith");
    }

    #[actix_web::test]
    async fn test_update_path_id_overrides_body_id() {
        let store = Arc::new(InMemoryUserStore::with_documents(vec![
            stored_alice("u1"),
            stored_alice("u2"),
        ]));
        let repo = UserRepository::new(store.clone());

        let updated = repo
            .update(
                "u1",
                UserPayload {
                    id: Some("u2".to_string()),
                    name: Some("Alicia Smith".to_string()),
                    ..alice()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "u1");
        assert_eq!(repo.get_by_id("u1").await.unwrap().name, "Alicia Smith");
        assert_eq!(repo.get_by_id("u2").await.unwrap().name, "Alice Smith");
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_not_found() {
        let store = Arc::new(RecordingStore::default());
        let repo = UserRepository::new(store.clone());

        let err = repo.update("missing", alice()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::UserNotFound);
        assert_eq!(err.code(), "ERRUSR002");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.writes(), 0);
    }

    #[actix_web::test]
    async fn test_update_with_invalid_data_never_writes() {
        let store = Arc::new(RecordingStore::with_documents(vec![stored_alice("u1")]));
        let repo = UserRepository::new(store.clone());

        let err = repo
            .update(
                "u1",
                UserPayload {
                    name: Some("A".to_string()),
                    ..UserPayload::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidUserData);
        assert_eq!(store.writes(), 0);
    }

    #[actix_web::test]
    async fn test_update_store_failure() {
        let repo = UserRepository::new(Arc::new(FailingStore("timeout")));

        let err = repo.update("u1", alice()).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::FailedToUpdateUser);
        assert_eq!(err.message(), "Failed to update user");
    }
}
