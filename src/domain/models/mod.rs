//! 외부 시스템 연동 모델
//!
//! 외부 ID 프로바이더가 검증한 호출자 정보를 요청 컨텍스트에 담는 타입을 제공합니다.

pub mod auth;
