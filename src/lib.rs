//! 계정 서비스 백엔드
//!
//! 사용자/관리자 계정 관리를 위한 REST 백엔드입니다.
//! 아바타 업로드를 포함한 회원 가입, 비밀번호 로그인, JWT 액세스/리프레시 토큰 발급과 회전,
//! 로그아웃, 비밀번호 변경, 프로필 수정을 제공합니다.
//!
//! # Features
//!
//! - **계정 관리**: 사용자(`/api/v1/users`)와 관리자(`/api/v1/admin`) 독립 운영
//! - **JWT 인증**: HS256 액세스/리프레시 토큰, 쿠키 또는 Bearer 헤더
//! - **토큰 회전**: 계정당 하나의 유효한 리프레시 토큰, 조건부 교체로 재사용 차단
//! - **미디어 업로드**: Cloudinary 호환 저장소에 아바타/커버 이미지 업로드
//! - **MongoDB**: 계정 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← JSON/multipart 파싱, 쿠키, 응답 envelope
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← AccountService, TokenService, MediaStorage
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore (MongoDB)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use account_service_backend::core::{AccountStores, AppState};
//! use account_service_backend::routes::configure_all_routes;
//!
//! let state = AppState::new(tokens, hasher, uploads, stores, media);
//! App::new().configure(|cfg| configure_all_routes(cfg, &state));
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;

#[cfg(test)]
pub(crate) mod test_support {
    //! 테스트 공용 픽스처

    use std::sync::Arc;
    use chrono::Duration;
    use crate::config::{TokenConfig, UploadConfig};
    use crate::core::{AccountStores, AppState};
    use crate::domain::dto::accounts::request::{LoginRequest, RegisterAccountRequest};
    use crate::domain::dto::accounts::response::LoginResponse;
    use crate::domain::entities::accounts::AccountKind;
    use crate::domain::models::media::UploadedFile;
    use crate::repositories::accounts::InMemoryAccountStore;
    use crate::services::accounts::AccountService;
    use crate::services::auth::{PasswordHasher, TokenService};
    use crate::services::storage::FakeMediaStorage;

    pub const BOUNDARY: &str = "----account-service-test-boundary";

    pub fn test_token_config() -> TokenConfig {
        TokenConfig {
            access_secret: "test-access-secret".to_string(),
            access_expiry: Duration::minutes(15),
            refresh_secret: "test-refresh-secret".to_string(),
            refresh_expiry: Duration::days(10),
        }
    }

    pub fn upload(field_name: &str, file_name: &str) -> UploadedFile {
        UploadedFile {
            field_name: field_name.to_string(),
            file_name: Some(file_name.to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    /// 메모리 저장소와 가짜 미디어 저장소로 조립한 상태
    pub struct TestContext {
        pub state: AppState,
        pub users: Arc<InMemoryAccountStore>,
        pub admins: Arc<InMemoryAccountStore>,
        pub media: Arc<FakeMediaStorage>,
    }

    pub fn test_context() -> TestContext {
        let users = Arc::new(InMemoryAccountStore::new());
        let admins = Arc::new(InMemoryAccountStore::new());
        let media = Arc::new(FakeMediaStorage::new());

        let state = AppState::new(
            test_token_config(),
            PasswordHasher::new(4),
            UploadConfig::default(),
            AccountStores {
                users: users.clone(),
                admins: admins.clone(),
            },
            media.clone(),
        );

        TestContext { state, users, admins, media }
    }

    pub fn test_service(kind: AccountKind) -> (Arc<AccountService>, Arc<InMemoryAccountStore>) {
        let store = Arc::new(InMemoryAccountStore::new());
        let service = AccountService::new(
            kind,
            store.clone(),
            Arc::new(FakeMediaStorage::new()),
            Arc::new(TokenService::new(test_token_config())),
            PasswordHasher::new(4),
        );
        (Arc::new(service), store)
    }

    /// 비밀번호 `p1`로 계정을 등록하고 로그인합니다.
    pub async fn seed_account(service: &AccountService, username: &str, email: &str) -> LoginResponse {
        service
            .register(RegisterAccountRequest {
                full_name: Some("Test Account".to_string()),
                email: Some(email.to_string()),
                username: Some(username.to_string()),
                password: Some("p1".to_string()),
                avatar: Some(upload("avatar", "avatar.png")),
                cover_image: None,
            })
            .await
            .unwrap();

        service
            .login(LoginRequest {
                username: Some(username.to_string()),
                email: None,
                password: "p1".to_string(),
            })
            .await
            .unwrap()
    }

    /// `multipart/form-data` 본문 생성
    ///
    /// `files`는 `(필드, 파일 이름, 내용)` 목록입니다.
    pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> Vec<u8> {
        let mut body = Vec::new();

        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }

        for (name, file_name, bytes) in files {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }
}
