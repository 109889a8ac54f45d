//! 사용자 서비스 백엔드
//!
//! 문서 저장소 위에 단일 사용자(User) 리소스의 조회/생성/수정 API를 제공합니다.
//! 쓰기 요청은 외부 ID 공급자(Firebase Authentication)가 발급한 Bearer 토큰으로 보호됩니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 검증 + 에러 분류
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    UserStore    │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_service_backend::repositories::users::{InMemoryUserStore, UserRepository};
//!
//! let repo = UserRepository::new(Arc::new(InMemoryUserStore::new()));
//! let user = repo.create(payload).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
