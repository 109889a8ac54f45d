//! # Domain Entities Module
//!
//! 문서 저장소에 저장되는 핵심 엔티티와 그 검증 규칙을 정의합니다.

pub mod users;
