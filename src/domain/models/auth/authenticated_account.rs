use std::future::{ready, Ready};
use std::ops::Deref;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use crate::core::errors::AppError;
use crate::domain::dto::accounts::response::AccountResponse;

/// 인증 미들웨어가 요청 확장(extensions)에 저장한 계정 정보
///
/// 보호된 라우트의 핸들러 인자로 선언하면 현재 로그인한 계정을 얻을 수 있습니다.
///
/// # Examples
///
/// ```rust,ignore
/// async fn current_user(account: AuthenticatedAccount) -> Result<HttpResponse, AppError> {
///     Ok(HttpResponse::Ok().json(ApiResponse::ok(account.into_inner(), "ok")))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount(pub AccountResponse);

impl AuthenticatedAccount {
    pub fn into_inner(self) -> AccountResponse {
        self.0
    }
}

impl Deref for AuthenticatedAccount {
    type Target = AccountResponse;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedAccount>() {
            Some(account) => ready(Ok(account.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Unauthorized request".to_string(),
            ))),
        }
    }
}
