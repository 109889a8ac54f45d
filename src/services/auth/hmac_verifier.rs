//! 공유 비밀키(HS256) ID 토큰 검증기
//!
//! 로컬 개발과 테스트에서 Firebase 없이 인증 흐름을 확인할 때 사용합니다.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use crate::config::AuthProvider;
use crate::domain::models::auth::VerifiedIdentity;
use super::id_token::{IdTokenClaims, IdTokenVerifier, TokenError};

pub struct HmacTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl HmacTokenVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl IdTokenVerifier for HmacTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, TokenError> {
        let token_data = decode::<IdTokenClaims>(token, &self.decoding_key, &self.validation)?;

        token_data.claims.into_identity(AuthProvider::Hmac)
    }

    fn provider(&self) -> AuthProvider {
        AuthProvider::Hmac
    }
}
