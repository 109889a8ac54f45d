//! # Domain Layer Module
//!
//! 사용자 리소스의 도메인 타입과 규칙을 담는 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities   - User 엔티티, 문서 매핑, 검증 규칙
//! ├── dto        - HTTP 요청 본문 (UserPayload)
//! └── models     - 인증 컨텍스트 (VerifiedIdentity)
//!      │
//!      ▼
//! Repository Layer (UserRepository + UserStore)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
