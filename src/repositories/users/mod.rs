//! 사용자 데이터 액세스 계층
//!
//! [`UserRepository`](user_repo::UserRepository)는 주입된 [`UserStore`](store::UserStore)
//! 위에서 검증과 에러 분류를 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserStore, UserRepository};
//!
//! let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));
//! let users = repo.get_all().await?;
//! ```

pub mod store;
pub mod mongo_store;
pub mod in_memory_store;
pub mod user_repo;

pub use store::{StoreError, StoredDocument, UserStore};
pub use mongo_store::MongoUserStore;
pub use in_memory_store::InMemoryUserStore;
pub use user_repo::UserRepository;
