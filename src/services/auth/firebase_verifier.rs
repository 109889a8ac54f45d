//! Firebase Authentication ID 토큰 검증기
//!
//! Firebase가 발급한 ID 토큰(RS256)을 Google 공개 서명 키(JWK)로 검증합니다.
//!
//! ## 검증 항목
//!
//! - 헤더 `alg`가 `RS256`이고 `kid`가 있어야 함
//! - `kid`에 해당하는 공개키로 서명 검증
//! - `aud` == 프로젝트 ID
//! - `iss` == `https://securetoken.google.com/<프로젝트 ID>`
//! - `exp` 만료 확인, `sub` 비어 있지 않음
//!
//! 공개키 목록은 응답의 `Cache-Control: max-age` 동안 캐시합니다.
//! 캐시에 없는 `kid`는 마지막 갱신 후 `MIN_REFRESH_INTERVAL_SECS`가
//! 지났을 때만 다시 받아오고, 그 전에는 바로 거부합니다.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use log::{debug, warn};
use reqwest::header::CACHE_CONTROL;

use crate::config::AuthProvider;
use crate::domain::models::auth::VerifiedIdentity;
use super::id_token::{IdTokenClaims, IdTokenVerifier, TokenError};

/// `Cache-Control` 헤더가 없을 때의 키 캐시 유지 시간 (초)
const DEFAULT_KEY_TTL_SECS: i64 = 3600;

/// 알 수 없는 `kid` 때문에 공개키를 다시 받아오는 최소 간격 (초)
const MIN_REFRESH_INTERVAL_SECS: i64 = 60;

struct CachedKeys {
    keys: JwkSet,
    fetched_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

/// 캐시 조회 결과
enum KeyLookup {
    Found(DecodingKey),
    /// 최근에 받아온 키 목록에 없음
    Unknown,
    /// 캐시가 없거나 만료됐거나, 재조회 간격이 지남
    Refresh,
}

pub struct FirebaseTokenVerifier {
    project_id: String,
    jwks_url: String,
    client: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
}

impl FirebaseTokenVerifier {
    pub fn new(project_id: impl Into<String>, jwks_url: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            jwks_url: jwks_url.into(),
            client: reqwest::Client::new(),
            cache: RwLock::new(None),
        }
    }

    fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.set_issuer(&[self.issuer()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud", "iss"]);
        validation
    }

    /// `kid`의 공개키를 캐시에서 찾고, 필요할 때만 키 목록을 다시 받아옵니다.
    async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, TokenError> {
        match self.lookup(kid)? {
            KeyLookup::Found(key) => return Ok(key),
            KeyLookup::Unknown => {
                debug!("캐시에 없는 kid {}, 재조회 간격 이내라 거부", kid);
                return Err(TokenError::UnknownKey(kid.to_string()));
            }
            KeyLookup::Refresh => {}
        }

        self.refresh_keys().await?;

        match self.lookup(kid)? {
            KeyLookup::Found(key) => Ok(key),
            _ => Err(TokenError::UnknownKey(kid.to_string())),
        }
    }

    fn lookup(&self, kid: &str) -> Result<KeyLookup, TokenError> {
        let cache = self
            .cache
            .read()
            .map_err(|_| TokenError::KeyFetch("키 캐시 잠금 실패".to_string()))?;

        let now = Utc::now();
        let Some(cached) = cache.as_ref().filter(|cached| cached.expires_at > now) else {
            return Ok(KeyLookup::Refresh);
        };

        if let Some(jwk) = cached.keys.find(kid) {
            return Ok(KeyLookup::Found(DecodingKey::from_jwk(jwk)?));
        }

        if now - cached.fetched_at < Duration::seconds(MIN_REFRESH_INTERVAL_SECS) {
            Ok(KeyLookup::Unknown)
        } else {
            Ok(KeyLookup::Refresh)
        }
    }

    async fn refresh_keys(&self) -> Result<(), TokenError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|e| TokenError::KeyFetch(format!("Google 공개키 요청 실패: {}", e)))?
            .error_for_status()
            .map_err(|e| TokenError::KeyFetch(format!("Google 공개키 응답 오류: {}", e)))?;

        let ttl = response
            .headers()
            .get(CACHE_CONTROL)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_max_age)
            .unwrap_or(DEFAULT_KEY_TTL_SECS);

        let keys = response
            .json::<JwkSet>()
            .await
            .map_err(|e| TokenError::KeyFetch(format!("Google 공개키 파싱 실패: {}", e)))?;

        debug!("Firebase 공개키 {}개 갱신, {}초 동안 유지", keys.keys.len(), ttl);

        let now = Utc::now();
        let mut cache = self
            .cache
            .write()
            .map_err(|_| TokenError::KeyFetch("키 캐시 잠금 실패".to_string()))?;
        *cache = Some(CachedKeys {
            keys,
            fetched_at: now,
            expires_at: now + Duration::seconds(ttl),
        });

        Ok(())
    }
}

#[async_trait]
impl IdTokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, TokenError> {
        let header = decode_header(token)?;

        if header.alg != Algorithm::RS256 {
            warn!("지원하지 않는 토큰 알고리즘: {:?}", header.alg);
            return Err(TokenError::Invalid(format!("unexpected alg {:?}", header.alg)));
        }

        let kid = header
            .kid
            .ok_or_else(|| TokenError::Invalid("kid 헤더가 없습니다".to_string()))?;

        let key = self.decoding_key(&kid).await?;
        let token_data = decode::<IdTokenClaims>(token, &key, &self.validation())?;

        token_data.claims.into_identity(AuthProvider::Firebase)
    }

    fn provider(&self) -> AuthProvider {
        AuthProvider::Firebase
    }
}

/// `Cache-Control` 값에서 `max-age` 초를 읽습니다.
fn parse_max_age(cache_control: &str) -> Option<i64> {
    cache_control
        .split(',')
        .filter_map(|directive| directive.trim().strip_prefix("max-age="))
        .find_map(|seconds| seconds.trim().parse().ok())
}
