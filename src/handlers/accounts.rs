//! # Account HTTP Handlers
//!
//! 사용자/관리자 계정 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 같은 핸들러가 두 스코프에 등록되며, 스코프마다 `web::Data<AccountService>`가 다릅니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 본문 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/register` | - | multipart | 201 |
//! | `POST` | `/login` | - | JSON | 200 |
//! | `POST` | `/logout` | ✅ | - | 200 |
//! | `POST` | `/refresh-token` | - | cookie / JSON | 200 |
//! | `POST` | `/change-password` | ✅ | JSON | 200 |
//! | `GET` | `/current-user` | ✅ | - | 200 |
//! | `PATCH` | `/update-account` | ✅ | JSON | 200 |
//! | `PATCH` | `/avatar` | ✅ | multipart | 200 |
//! | `PATCH` | `/cover-image` | ✅ | multipart | 200 |
//!
//! 모든 성공 응답은 [`ApiResponse`] envelope으로, 실패 응답은 `AppError`의
//! `ResponseError` 구현으로 직렬화됩니다.

use std::collections::HashMap;
use actix_multipart::Multipart;
use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::TryStreamExt;
use crate::config::{AuthCookies, UploadConfig};
use crate::core::errors::AppError;
use crate::domain::dto::accounts::request::{
    ChangePasswordRequest, LoginRequest, RefreshTokenRequest, RegisterAccountRequest,
    UpdateAccountRequest,
};
use crate::domain::dto::common::{ApiResponse, Empty};
use crate::domain::models::auth::AuthenticatedAccount;
use crate::domain::models::media::UploadedFile;
use crate::domain::models::token::TokenPair;
use crate::services::accounts::AccountService;

/// 계정 등록
///
/// # Endpoint
/// `POST /register` (multipart: `fullName`, `email`, `username`|`adminname`, `password`, `avatar`, `coverImage`)
pub async fn register(
    service: web::Data<AccountService>,
    uploads: web::Data<UploadConfig>,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut form = read_multipart(
        payload,
        &["fullName", "email", "username", "adminname", "password"],
        &["avatar", "coverImage"],
        uploads.max_file_bytes,
    )
    .await?;

    let request = RegisterAccountRequest {
        full_name: form.fields.remove("fullName"),
        email: form.fields.remove("email"),
        username: form.fields.remove("username").or_else(|| form.fields.remove("adminname")),
        password: form.fields.remove("password"),
        avatar: form.files.remove("avatar"),
        cover_image: form.files.remove("coverImage"),
    };

    let created = service.register(request).await?;
    let message = format!("{} registered successfully", service.kind().label());

    Ok(HttpResponse::Created().json(ApiResponse::created(created, message)))
}

/// 로그인
///
/// 토큰 쌍을 `accessToken`, `refreshToken` 쿠키로 설정하고 본문에도 담습니다.
///
/// # Endpoint
/// `POST /login`
pub async fn login(
    service: web::Data<AccountService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;
    let message = format!("{} logged in successfully", service.kind().label());

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(AuthCookies::ACCESS_TOKEN, response.access_token.clone()))
        .cookie(auth_cookie(AuthCookies::REFRESH_TOKEN, response.refresh_token.clone()))
        .json(ApiResponse::ok(response, message)))
}

/// 로그아웃
///
/// 저장된 리프레시 토큰을 지우고 두 쿠키를 만료시킵니다.
///
/// # Endpoint
/// `POST /logout`
pub async fn logout(
    service: web::Data<AccountService>,
    account: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    service.logout(&account.id).await?;
    let message = format!("{} logged out", service.kind().label());

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(AuthCookies::ACCESS_TOKEN))
        .cookie(removal_cookie(AuthCookies::REFRESH_TOKEN))
        .json(ApiResponse::ok(Empty {}, message)))
}

/// 토큰 갱신
///
/// 리프레시 토큰은 `refreshToken` 쿠키를 먼저 보고, 없으면 JSON 본문에서 찾습니다.
///
/// # Endpoint
/// `POST /refresh-token`
pub async fn refresh_token(
    service: web::Data<AccountService>,
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let presented = req
        .cookie(AuthCookies::REFRESH_TOKEN)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| body.and_then(|b| b.into_inner().refresh_token));

    let tokens: TokenPair = service.refresh(presented.as_deref()).await?;
    log::info!("{} 토큰 갱신 성공", service.kind().label());

    Ok(HttpResponse::Ok()
        .cookie(auth_cookie(AuthCookies::ACCESS_TOKEN, tokens.access_token.clone()))
        .cookie(auth_cookie(AuthCookies::REFRESH_TOKEN, tokens.refresh_token.clone()))
        .json(ApiResponse::ok(tokens, "Access token refreshed")))
}

/// 비밀번호 변경
///
/// # Endpoint
/// `POST /change-password`
pub async fn change_password(
    service: web::Data<AccountService>,
    account: AuthenticatedAccount,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    service.change_password(&account.id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(Empty {}, "Password changed successfully")))
}

/// 현재 로그인한 계정 조회
///
/// # Endpoint
/// `GET /current-user`
pub async fn current_account(
    service: web::Data<AccountService>,
    account: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let message = format!("{} fetched successfully", service.kind().label());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(account.into_inner(), message)))
}

/// 표시 이름과 이메일 수정
///
/// # Endpoint
/// `PATCH /update-account`
pub async fn update_account(
    service: web::Data<AccountService>,
    account: AuthenticatedAccount,
    payload: web::Json<UpdateAccountRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = service.update_account(&account.id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Account details updated successfully")))
}

/// 아바타 교체
///
/// # Endpoint
/// `PATCH /avatar` (multipart: `avatar`)
pub async fn update_avatar(
    service: web::Data<AccountService>,
    uploads: web::Data<UploadConfig>,
    account: AuthenticatedAccount,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut form = read_multipart(payload, &[], &["avatar"], uploads.max_file_bytes).await?;
    let updated = service.update_avatar(&account.id, form.files.remove("avatar")).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Avatar image updated successfully")))
}

/// 커버 이미지 교체
///
/// # Endpoint
/// `PATCH /cover-image` (multipart: `coverImage`)
pub async fn update_cover_image(
    service: web::Data<AccountService>,
    uploads: web::Data<UploadConfig>,
    account: AuthenticatedAccount,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let mut form = read_multipart(payload, &[], &["coverImage"], uploads.max_file_bytes).await?;
    let updated = service
        .update_cover_image(&account.id, form.files.remove("coverImage"))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated, "Cover image updated successfully")))
}

/// http-only, secure, path `/` 인증 쿠키
fn auth_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build(name, value)
        .http_only(true)
        .secure(true)
        .path("/")
        .finish()
}

/// 같은 속성을 가진 만료 쿠키
fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = auth_cookie(name, String::new());
    cookie.make_removal();
    cookie
}

/// 텍스트 필드 한 개의 최대 크기
const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

/// 메모리에 읽어 들인 멀티파트 본문
#[derive(Debug, Default)]
struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedFile>,
}

/// 멀티파트 본문을 텍스트 필드와 파일로 나눕니다.
///
/// 텍스트 필드는 `allowed_fields`, 파일 필드는 `allowed_files`에 있는 이름만 받으며,
/// 이름마다 한 번만 허용됩니다. 본문을 읽기 전에 이름을 확인하므로 허용되지 않은
/// 파트는 버퍼링되지 않습니다. 파일 이름과 내용이 모두 빈 파트(선택하지 않은 파일 입력)는
/// 무시합니다.
///
/// # Errors
///
/// * `AppError::ValidationError` - 잘못된 멀티파트 본문, 허용되지 않거나 중복된 필드,
///   크기 제한 초과(파일 `max_bytes`, 텍스트 `MAX_TEXT_FIELD_BYTES`), UTF-8이 아닌 텍스트 필드
async fn read_multipart(
    mut payload: Multipart,
    allowed_fields: &[&str],
    allowed_files: &[&str],
    max_bytes: usize,
) -> Result<MultipartForm, AppError> {
    let mut form = MultipartForm::default();

    while let Some(mut field) = payload.try_next().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let limit = match file_name {
            Some(_) if !allowed_files.contains(&name.as_str()) => {
                return Err(AppError::ValidationError(format!("Unexpected file field: {}", name)));
            }
            Some(_) => max_bytes,
            None if !allowed_fields.contains(&name.as_str()) => {
                return Err(AppError::ValidationError(format!("Unexpected field: {}", name)));
            }
            None if form.fields.contains_key(&name) => {
                return Err(AppError::ValidationError(format!("Only one {} field is allowed", name)));
            }
            None => MAX_TEXT_FIELD_BYTES,
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await.map_err(multipart_error)? {
            if bytes.len() + chunk.len() > limit {
                return Err(AppError::ValidationError(format!(
                    "{} exceeds the maximum size of {} bytes",
                    name, limit
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        match file_name {
            Some(file_name) => {
                let unnamed = file_name.is_empty();
                let file = UploadedFile {
                    field_name: name.clone(),
                    file_name: Some(file_name),
                    content_type,
                    bytes,
                };
                if unnamed && file.is_empty() {
                    continue;
                }
                if form.files.contains_key(&name) {
                    return Err(AppError::ValidationError(format!("Only one {} file is allowed", name)));
                }

                form.files.insert(name, file);
            }
            None => {
                let value = String::from_utf8(bytes).map_err(|_| {
                    AppError::ValidationError(format!("{} must be valid UTF-8 text", name))
                })?;
                form.fields.insert(name, value);
            }
        }
    }

    Ok(form)
}

fn multipart_error(err: actix_multipart::MultipartError) -> AppError {
    AppError::ValidationError(format!("Invalid multipart body: {}", err))
}
