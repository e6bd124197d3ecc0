//! # Route Configuration
//!
//! 모든 HTTP 라우트를 한곳에서 등록합니다.
//!
//! ```text
//! /health                              GET    liveness
//! /api/v1/users/...                    AccountService(User)
//! /api/v1/admin/...                    AccountService(Admin)
//!   ├── /register          POST
//!   ├── /login             POST
//!   ├── /refresh-token     POST
//!   ├── /logout            POST   🔒
//!   ├── /change-password   POST   🔒
//!   ├── /current-user      GET    🔒
//!   ├── /update-account    PATCH  🔒
//!   ├── /avatar            PATCH  🔒
//!   └── /cover-image       PATCH  🔒
//! ```
//!
//! 🔒 표시 라우트는 해당 스코프의 서비스로 만든 `AuthMiddleware`가 감쌉니다.

use std::sync::Arc;
use actix_web::{get, web, HttpResponse, Scope};
use serde_json::json;
use crate::core::{AppError, AppState};
use crate::domain::entities::accounts::AccountKind;
use crate::handlers::accounts;
use crate::middlewares::AuthMiddleware;
use crate::services::accounts::AccountService;

/// JSON 본문 최대 크기
pub const JSON_BODY_LIMIT: usize = 16 * 1024;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(json_config())
        .app_data(web::Data::new(state.uploads.clone()))
        .service(health_check);

    for kind in [AccountKind::User, AccountKind::Admin] {
        cfg.service(account_scope(state.accounts(kind)));
    }
}

fn account_scope(service: Arc<AccountService>) -> Scope {
    let auth = || AuthMiddleware::new(service.clone());

    web::scope(service.kind().scope_path())
        .app_data(web::Data::from(service.clone()))
        .route("/register", web::post().to(accounts::register))
        .route("/login", web::post().to(accounts::login))
        .route("/refresh-token", web::post().to(accounts::refresh_token))
        .service(
            web::resource("/logout")
                .wrap(auth())
                .route(web::post().to(accounts::logout)),
        )
        .service(
            web::resource("/change-password")
                .wrap(auth())
                .route(web::post().to(accounts::change_password)),
        )
        .service(
            web::resource("/current-user")
                .wrap(auth())
                .route(web::get().to(accounts::current_account)),
        )
        .service(
            web::resource("/update-account")
                .wrap(auth())
                .route(web::patch().to(accounts::update_account)),
        )
        .service(
            web::resource("/avatar")
                .wrap(auth())
                .route(web::patch().to(accounts::update_avatar)),
        )
        .service(
            web::resource("/cover-image")
                .wrap(auth())
                .route(web::patch().to(accounts::update_cover_image)),
        )
}

/// JSON 파싱 실패도 실패 envelope(400)으로 응답합니다.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_BODY_LIMIT)
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
