//! # 계정 서비스 구현
//!
//! 등록, 로그인, 로그아웃, 토큰 갱신, 비밀번호 변경, 프로필 수정을 조율합니다.
//! 사용자(`users`)와 관리자(`admins`)는 같은 서비스의 서로 다른 인스턴스가 처리합니다.
//!
//! ## 의존성
//!
//! ```text
//! AccountService
//! ├── Arc<dyn AccountStore>   - 계정 레코드 저장소
//! ├── Arc<dyn MediaStorage>   - 아바타/커버 이미지 업로드
//! ├── Arc<TokenService>       - JWT 발급/검증
//! └── PasswordHasher          - bcrypt
//! ```
//!
//! ## 리프레시 토큰 회전
//!
//! 계정당 유효한 리프레시 토큰은 하나뿐입니다. 로그인은 저장된 값을 덮어쓰고,
//! 갱신은 `{ _id, refreshToken: presented }` 조건부 교체로 새 값을 기록합니다.
//! 같은 토큰으로 동시에 갱신을 시도하면 한 요청만 성공하고 나머지는 401을 받습니다.

use std::sync::Arc;
use log::{info, warn};
use validator::Validate;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::accounts::request::{
    ChangePasswordRequest, LoginRequest, RegisterAccountRequest, UpdateAccountRequest,
};
use crate::domain::dto::accounts::response::{AccountResponse, LoginResponse};
use crate::domain::entities::accounts::{Account, AccountKind};
use crate::domain::models::media::UploadedFile;
use crate::domain::models::token::TokenPair;
use crate::repositories::accounts::AccountStore;
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::storage::MediaStorage;
use crate::utils::string_utils::{
    clean_optional_string, normalize_identifier, validate_required_string, validation_message,
};

pub struct AccountService {
    kind: AccountKind,
    store: Arc<dyn AccountStore>,
    media: Arc<dyn MediaStorage>,
    tokens: Arc<TokenService>,
    hasher: PasswordHasher,
}

impl AccountService {
    pub fn new(
        kind: AccountKind,
        store: Arc<dyn AccountStore>,
        media: Arc<dyn MediaStorage>,
        tokens: Arc<TokenService>,
        hasher: PasswordHasher,
    ) -> Self {
        Self { kind, store, media, tokens, hasher }
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// 새 계정 등록
    ///
    /// # Process
    ///
    /// 1. 필수 텍스트 필드 검증 및 정규화
    /// 2. 핸들/이메일 중복 확인
    /// 3. 아바타(필수), 커버 이미지(선택) 업로드
    /// 4. 비밀번호 해싱 후 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 필드 누락, 아바타 파일 누락
    /// * `AppError::ConflictError` - 핸들 또는 이메일 중복
    /// * `AppError::ExternalServiceError` - 아바타 업로드 실패
    pub async fn register(&self, request: RegisterAccountRequest) -> AppResult<AccountResponse> {
        let input = request.validate()?;

        if self
            .store
            .find_by_username_or_email(Some(&input.username), Some(&input.email))
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "{} with email or username already exists",
                self.kind.label()
            )));
        }

        let avatar_file = request
            .avatar
            .as_ref()
            .ok_or_else(|| AppError::ValidationError("Avatar file is required".to_string()))?;
        let avatar = self.media.upload(avatar_file).await?;

        let cover_image = match request.cover_image.as_ref() {
            Some(file) => match self.media.upload(file).await {
                Ok(uploaded) => Some(uploaded.url),
                Err(e) => {
                    warn!("커버 이미지 업로드 실패, 커버 없이 등록합니다: {}", e);
                    None
                }
            },
            None => None,
        };

        let password_hash = self.hasher.hash(&input.password)?;
        let account = Account::new(
            input.username,
            input.email,
            input.full_name,
            password_hash,
            avatar.url,
            cover_image,
        );

        let saved = self.store.insert(account).await?;
        info!("{} 등록 완료: {}", self.kind.label(), saved.username);

        Ok(AccountResponse::from(saved))
    }

    /// 핸들 또는 이메일과 비밀번호로 로그인
    ///
    /// 성공하면 새 토큰 쌍을 발급하고 리프레시 토큰을 계정에 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 핸들/이메일 또는 비밀번호 누락
    /// * `AppError::NotFound` - 일치하는 계정 없음
    /// * `AppError::AuthenticationError` - 비밀번호 불일치
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        let username = clean_optional_string(request.username.as_deref())
            .map(|u| normalize_identifier(&u));
        let email = clean_optional_string(request.email.as_deref())
            .map(|e| normalize_identifier(&e));

        let account = self
            .store
            .find_by_username_or_email(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} does not exist", self.kind.label())))?;

        if !self.hasher.verify(&request.password, &account.password_hash)? {
            return Err(AppError::AuthenticationError(format!(
                "Invalid {} credentials",
                self.kind.label().to_lowercase()
            )));
        }

        let tokens = self.issue_tokens(&account).await?;
        info!("{} 로그인: {}", self.kind.label(), account.username);

        Ok(LoginResponse::new(self.kind, account, tokens))
    }

    /// 저장된 리프레시 토큰 제거
    pub async fn logout(&self, account_id: &str) -> AppResult<()> {
        self.store.set_refresh_token(account_id, None).await?;
        info!("{} 로그아웃: {}", self.kind.label(), account_id);
        Ok(())
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 누락, 검증 실패, 계정 없음,
    ///   저장된 토큰과 불일치, 동시 갱신 경쟁에서 패배
    pub async fn refresh(&self, presented: Option<&str>) -> AppResult<TokenPair> {
        let presented = presented
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Unauthorized request".to_string()))?;

        let claims = self.tokens.verify_refresh_token(presented)?;

        let account = self
            .store
            .find_by_id(&claims.id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid refresh token".to_string()))?;

        if account.refresh_token.as_deref() != Some(presented) {
            return Err(AppError::AuthenticationError(
                "Refresh token is expired or used".to_string(),
            ));
        }

        let tokens = self.generate_tokens(&account)?;
        let rotated = self
            .store
            .rotate_refresh_token(&claims.id, presented, &tokens.refresh_token)
            .await?;

        if !rotated {
            warn!("리프레시 토큰 동시 갱신 감지: {}", claims.id);
            return Err(AppError::AuthenticationError(
                "Refresh token is expired or used".to_string(),
            ));
        }

        Ok(tokens)
    }

    /// 비밀번호 변경
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 새 비밀번호 확인 불일치, 이전 비밀번호 불일치
    pub async fn change_password(
        &self,
        account_id: &str,
        request: ChangePasswordRequest,
    ) -> AppResult<()> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        let account = self.find_account(account_id).await?;

        if !self.hasher.verify(&request.old_password, &account.password_hash)? {
            return Err(AppError::ValidationError("Invalid old password".to_string()));
        }

        let password_hash = self.hasher.hash(&request.new_password)?;
        if !self.store.set_password_hash(account_id, &password_hash).await? {
            return Err(self.not_found());
        }

        info!("{} 비밀번호 변경: {}", self.kind.label(), account.username);
        Ok(())
    }

    /// 표시 이름과 이메일 변경
    pub async fn update_account(
        &self,
        account_id: &str,
        request: UpdateAccountRequest,
    ) -> AppResult<AccountResponse> {
        let full_name = validate_required_string(Some(&request.full_name), "fullName")?;
        let email = normalize_identifier(&validate_required_string(Some(&request.email), "email")?);
        UpdateAccountRequest { full_name: full_name.clone(), email: email.clone() }
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        self.store
            .update_profile(account_id, &full_name, &email)
            .await?
            .map(AccountResponse::from)
            .ok_or_else(|| self.not_found())
    }

    /// 아바타 교체
    pub async fn update_avatar(
        &self,
        account_id: &str,
        file: Option<UploadedFile>,
    ) -> AppResult<AccountResponse> {
        let file = file.ok_or_else(|| AppError::ValidationError("Avatar file is missing".to_string()))?;
        let uploaded = self.media.upload(&file).await?;

        self.store
            .set_avatar(account_id, &uploaded.url)
            .await?
            .map(AccountResponse::from)
            .ok_or_else(|| self.not_found())
    }

    /// 커버 이미지 교체
    pub async fn update_cover_image(
        &self,
        account_id: &str,
        file: Option<UploadedFile>,
    ) -> AppResult<AccountResponse> {
        let file = file
            .ok_or_else(|| AppError::ValidationError("Cover image file is missing".to_string()))?;
        let uploaded = self.media.upload(&file).await?;

        self.store
            .set_cover_image(account_id, &uploaded.url)
            .await?
            .map(AccountResponse::from)
            .ok_or_else(|| self.not_found())
    }

    /// 인증 미들웨어가 사용하는 조회. 민감 필드가 제거된 레코드를 반환합니다.
    pub async fn find_sanitized_by_id(&self, account_id: &str) -> AppResult<Option<AccountResponse>> {
        Ok(self.store.find_by_id(account_id).await?.map(AccountResponse::from))
    }

    /// 토큰 쌍을 발급하고 리프레시 토큰을 저장합니다.
    async fn issue_tokens(&self, account: &Account) -> AppResult<TokenPair> {
        let tokens = self.generate_tokens(account)?;
        let account_id = account.id_string().unwrap_or_default();

        if !self
            .store
            .set_refresh_token(&account_id, Some(&tokens.refresh_token))
            .await?
        {
            return Err(self.not_found());
        }

        Ok(tokens)
    }

    fn generate_tokens(&self, account: &Account) -> AppResult<TokenPair> {
        self.tokens.generate_token_pair(account).map_err(|e| {
            log::error!("토큰 생성 실패: {}", e);
            AppError::InternalError(
                "Something went wrong while generating refresh and access token".to_string(),
            )
        })
    }

    async fn find_account(&self, account_id: &str) -> AppResult<Account> {
        self.store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| self.not_found())
    }

    fn not_found(&self) -> AppError {
        AppError::NotFound(format!("{} not found", self.kind.label()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::accounts::InMemoryAccountStore;
    use crate::services::storage::FakeMediaStorage;
    use crate::test_support::{test_token_config, upload};

    struct Fixture {
        service: AccountService,
        store: Arc<InMemoryAccountStore>,
        media: Arc<FakeMediaStorage>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryAccountStore::new());
        let media = Arc::new(FakeMediaStorage::new());
        let service = AccountService::new(
            AccountKind::User,
            store.clone(),
            media.clone(),
            Arc::new(TokenService::new(test_token_config())),
            PasswordHasher::new(4),
        );
        Fixture { service, store, media }
    }

    fn register_request(username: &str, email: &str) -> RegisterAccountRequest {
        RegisterAccountRequest {
            full_name: Some("Alice".to_string()),
            email: Some(email.to_string()),
            username: Some(username.to_string()),
            password: Some("p1".to_string()),
            avatar: Some(upload("avatar", "a.png")),
            cover_image: None,
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: Some(username.to_string()),
            email: None,
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_stores_hash_and_avatar() {
        let f = fixture();

        let created = f.service.register(register_request("Alice", "A@x.com")).await.unwrap();
        let stored = f.store.raw(&created.id).unwrap();

        assert_eq!(created.username, "alice");
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.avatar, "https://media.test/a.png");
        assert_ne!(stored.password_hash, "p1");
        assert!(stored.refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_register_duplicate_is_conflict() {
        let f = fixture();
        f.service.register(register_request("alice", "a@x.com")).await.unwrap();

        let by_name = f.service.register(register_request("alice", "b@x.com")).await;
        let by_email = f.service.register(register_request("bob", "a@x.com")).await;

        assert!(matches!(by_name, Err(AppError::ConflictError(_))));
        assert!(matches!(by_email, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_register_without_avatar_uploads_nothing() {
        let f = fixture();
        let mut request = register_request("alice", "a@x.com");
        request.avatar = None;
        request.cover_image = Some(upload("coverImage", "c.png"));

        let result = f.service.register(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(f.media.uploads(), 0);
        assert_eq!(f.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_register_ignores_failed_cover_upload() {
        let f = fixture();
        f.media.fail_cover_images();
        let mut request = register_request("alice", "a@x.com");
        request.cover_image = Some(upload("coverImage", "c.png"));

        let created = f.service.register(request).await.unwrap();

        assert!(created.cover_image.is_none());
    }

    #[actix_web::test]
    async fn test_login_persists_refresh_token() {
        let f = fixture();
        let created = f.service.register(register_request("alice", "a@x.com")).await.unwrap();

        let login = f.service.login(login_request(" ALICE ", "p1")).await.unwrap();

        assert_eq!(login.user.id, created.id);
        assert_eq!(
            f.store.raw(&created.id).unwrap().refresh_token.as_deref(),
            Some(login.refresh_token.as_str())
        );
    }

    #[actix_web::test]
    async fn test_login_failures() {
        let f = fixture();
        f.service.register(register_request("alice", "a@x.com")).await.unwrap();

        let unknown = f.service.login(login_request("bob", "p1")).await;
        let wrong = f.service.login(login_request("alice", "nope")).await;
        let missing = f.service.login(LoginRequest { password: "p1".to_string(), ..Default::default() }).await;

        assert!(matches!(unknown, Err(AppError::NotFound(_))));
        assert!(matches!(wrong, Err(AppError::AuthenticationError(_))));
        assert!(matches!(missing, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_with_unrepresentable_expiry_fails_without_storing_token() {
        let store = Arc::new(InMemoryAccountStore::new());
        let mut config = test_token_config();
        config.access_expiry = chrono::Duration::days(100_000_000);
        let service = AccountService::new(
            AccountKind::User,
            store.clone(),
            Arc::new(FakeMediaStorage::new()),
            Arc::new(TokenService::new(config)),
            PasswordHasher::new(4),
        );
        let created = service.register(register_request("alice", "a@x.com")).await.unwrap();

        let result = service.login(login_request("alice", "p1")).await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
        assert!(store.raw(&created.id).unwrap().refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_refresh_rotates_and_rejects_old_token() {
        let f = fixture();
        f.service.register(register_request("alice", "a@x.com")).await.unwrap();
        let login = f.service.login(login_request("alice", "p1")).await.unwrap();

        let rotated = f.service.refresh(Some(&login.refresh_token)).await.unwrap();
        let replay = f.service.refresh(Some(&login.refresh_token)).await;

        assert_ne!(rotated.refresh_token, login.refresh_token);
        assert!(matches!(replay, Err(AppError::AuthenticationError(_))));
        assert!(f.service.refresh(Some(&rotated.refresh_token)).await.is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_after_logout_is_rejected() {
        let f = fixture();
        let created = f.service.register(register_request("alice", "a@x.com")).await.unwrap();
        let login = f.service.login(login_request("alice", "p1")).await.unwrap();

        f.service.logout(&created.id).await.unwrap();

        assert!(matches!(
            f.service.refresh(Some(&login.refresh_token)).await,
            Err(AppError::AuthenticationError(_))
        ));
        assert!(matches!(
            f.service.refresh(None).await,
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_change_password() {
        let f = fixture();
        let created = f.service.register(register_request("alice", "a@x.com")).await.unwrap();
        let request = |old: &str| ChangePasswordRequest {
            old_password: old.to_string(),
            new_password: "p2".to_string(),
            confirm_password: "p2".to_string(),
        };

        let wrong_old = f.service.change_password(&created.id, request("bad")).await;
        assert!(matches!(wrong_old, Err(AppError::ValidationError(m)) if m == "Invalid old password"));

        f.service.change_password(&created.id, request("p1")).await.unwrap();

        assert!(f.service.login(login_request("alice", "p1")).await.is_err());
        assert!(f.service.login(login_request("alice", "p2")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_update_account_email_conflict() {
        let f = fixture();
        let alice = f.service.register(register_request("alice", "a@x.com")).await.unwrap();
        f.service.register(register_request("bob", "b@x.com")).await.unwrap();

        let taken = f.service
            .update_account(&alice.id, UpdateAccountRequest {
                full_name: "Alice".to_string(),
                email: "B@x.com".to_string(),
            })
            .await;
        let updated = f.service
            .update_account(&alice.id, UpdateAccountRequest {
                full_name: " Alice B ".to_string(),
                email: "alice@x.com".to_string(),
            })
            .await
            .unwrap();

        assert!(matches!(taken, Err(AppError::ConflictError(_))));
        assert_eq!(updated.full_name, "Alice B");
        assert_eq!(updated.email, "alice@x.com");
    }

    #[actix_web::test]
    async fn test_update_images() {
        let f = fixture();
        let alice = f.service.register(register_request("alice", "a@x.com")).await.unwrap();

        let missing = f.service.update_avatar(&alice.id, None).await;
        let avatar = f.service
            .update_avatar(&alice.id, Some(upload("avatar", "new.png")))
            .await
            .unwrap();
        let cover = f.service
            .update_cover_image(&alice.id, Some(upload("coverImage", "cover.png")))
            .await
            .unwrap();

        assert!(matches!(missing, Err(AppError::ValidationError(_))));
        assert_eq!(avatar.avatar, "https://media.test/new.png");
        assert_eq!(cover.cover_image.as_deref(), Some("https://media.test/cover.png"));
    }
}
