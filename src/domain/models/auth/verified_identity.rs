use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::core::errors::ApiError;

/// ID 토큰 검증으로 확인된 호출자 정보
///
/// 인증 미들웨어가 요청 extensions에 저장하며, 핸들러에서 추출자로 받을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    /// 발급자가 부여한 사용자 고유 ID (`sub`)
    pub uid: String,

    pub email: Option<String>,

    /// 토큰을 검증한 프로바이더
    pub provider: AuthProvider,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for VerifiedIdentity {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<VerifiedIdentity>() {
            Some(identity) => ready(Ok(identity.clone())),
            None => ready(Err(ApiError::no_token().into())),
        }
    }
}
