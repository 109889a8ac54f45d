//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::core::ApiError;
use crate::domain::models::auth::VerifiedIdentity;
use crate::services::auth::{extract_bearer_token, IdTokenVerifier};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate(&req).await {
                // 검증된 호출자 정보를 Request Extensions에 저장
                Ok(identity) => {
                    log::debug!("인증 성공: uid {}", identity.uid);
                    req.extensions_mut().insert(identity);
                }
                // 핸들러를 거치지 않고 401 응답
                Err(err) => {
                    log::warn!("인증 실패: {} {} - {}", req.method(), req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청의 Bearer 토큰을 주입된 검증기로 확인
async fn authenticate(req: &ServiceRequest) -> Result<VerifiedIdentity, ApiError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
        .map(str::to_string)
        .ok_or_else(ApiError::no_token)?;

    let verifier = req
        .app_data::<web::Data<dyn IdTokenVerifier>>()
        .cloned()
        .ok_or_else(|| ApiError::other("Token verifier is not configured"))?;

    verifier.verify(&token).await.map_err(|e| {
        log::warn!("{} 토큰 검증 실패: {}", verifier.provider().as_str(), e);
        ApiError::invalid_token()
    })
}
