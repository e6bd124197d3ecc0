//! 액세스 토큰 인증 미들웨어
//!
//! 보호된 라우트 앞에서 액세스 토큰을 검증하고, 토큰이 가리키는 계정을
//! 요청 확장(extensions)에 [`AuthenticatedAccount`](crate::domain::models::auth::AuthenticatedAccount)로 첨부합니다.
//!
//! ## 토큰 위치
//!
//! 1. `accessToken` 쿠키 (우선)
//! 2. `Authorization: Bearer <token>` 헤더
//!
//! 토큰이 없거나, 검증에 실패하거나, 계정이 존재하지 않으면 401 실패 envelope을 반환합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! web::resource("/logout")
//!     .wrap(AuthMiddleware::new(service.clone()))
//!     .route(web::post().to(handlers::accounts::logout))
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::auth_inner::AuthMiddlewareService;
use crate::services::accounts::AccountService;

pub struct AuthMiddleware {
    accounts: Arc<AccountService>,
}

impl AuthMiddleware {
    /// 계정 종류별 서비스로 미들웨어를 만듭니다.
    ///
    /// 사용자 스코프에는 사용자 서비스를, 관리자 스코프에는 관리자 서비스를 넘깁니다.
    pub fn new(accounts: Arc<AccountService>) -> Self {
        Self { accounts }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            accounts: self.accounts.clone(),
        }))
    }
}
