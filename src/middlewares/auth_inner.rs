use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::config::AuthCookies;
use crate::core::errors::AppError;
use crate::domain::models::auth::AuthenticatedAccount;
use crate::services::accounts::AccountService;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub accounts: Arc<AccountService>,
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
        let accounts = self.accounts.clone();

        Box::pin(async move {
            match authenticate(&req, &accounts).await {
                Ok(account) => {
                    log::debug!("인증 성공: 계정 ID {}", account.id);
                    req.extensions_mut().insert(account);
                }
                Err(err) => {
                    log::warn!("인증 실패 ({}): {}", req.path(), err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 쿠키 또는 Authorization 헤더에서 액세스 토큰을 꺼냅니다.
fn extract_token(req: &ServiceRequest) -> Result<String, AppError> {
    if let Some(cookie) = req.cookie(AuthCookies::ACCESS_TOKEN) {
        if !cookie.value().is_empty() {
            return Ok(cookie.value().to_string());
        }
    }

    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Unauthorized request".to_string()))?;

    TokenService::extract_bearer_token(auth_header).map(str::to_string)
}

async fn authenticate(
    req: &ServiceRequest,
    accounts: &AccountService,
) -> Result<AuthenticatedAccount, AppError> {
    let token = extract_token(req)?;
    let claims = accounts.tokens().verify_access_token(&token)?;

    let account = accounts
        .find_sanitized_by_id(&claims.id)
        .await?
        .ok_or_else(|| AppError::AuthenticationError("Invalid access token".to_string()))?;

    Ok(AuthenticatedAccount(account))
}
