//! 인증 서비스 모듈
//!
//! 외부 ID 공급자가 발급한 ID 토큰을 검증합니다.
//! 토큰 발급은 하지 않으며, 검증기는 설정에 따라 하나가 선택되어
//! `web::Data<dyn IdTokenVerifier>`로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::config::IdentityConfig;
//! use crate::services::auth::build_verifier;
//!
//! let verifier = build_verifier(&IdentityConfig::from_env()?);
//! let identity = verifier.verify(token).await?;
//! ```

pub mod id_token;
pub mod hmac_verifier;
pub mod firebase_verifier;

pub use id_token::*;
pub use hmac_verifier::HmacTokenVerifier;
pub use firebase_verifier::FirebaseTokenVerifier;

use std::sync::Arc;
use crate::config::IdentityConfig;

/// 설정된 프로바이더의 검증기를 생성합니다.
pub fn build_verifier(config: &IdentityConfig) -> Arc<dyn IdTokenVerifier> {
    match config {
        IdentityConfig::Firebase { project_id, jwks_url } => {
            Arc::new(FirebaseTokenVerifier::new(project_id.as_str(), jwks_url.as_str()))
        }
        IdentityConfig::Hmac { secret } => Arc::new(HmacTokenVerifier::new(secret)),
    }
}
