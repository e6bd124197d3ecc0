//! # Application State
//!
//! `main`에서 한 번 조립되어 라우트 설정에 전달되는 애플리케이션 상태입니다.
//! 전역 서비스 로케이터 대신, 필요한 의존성을 생성 시점에 명시적으로 연결합니다.
//!
//! ```text
//! AppState
//! ├── users  : Arc<AccountService>  ── users 컬렉션, /api/v1/users
//! ├── admins : Arc<AccountService>  ── admins 컬렉션, /api/v1/admin
//! └── uploads: UploadConfig
//! ```
//!
//! 두 서비스는 같은 `TokenService`와 `MediaStorage`를 공유합니다.

use std::sync::Arc;
use crate::config::{TokenConfig, UploadConfig};
use crate::domain::entities::accounts::AccountKind;
use crate::repositories::accounts::AccountStore;
use crate::services::accounts::AccountService;
use crate::services::auth::{PasswordHasher, TokenService};
use crate::services::storage::MediaStorage;

/// 계정 종류별 저장소
pub struct AccountStores {
    pub users: Arc<dyn AccountStore>,
    pub admins: Arc<dyn AccountStore>,
}

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<AccountService>,
    pub admins: Arc<AccountService>,
    pub uploads: UploadConfig,
}

impl AppState {
    /// 서비스 그래프를 조립합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let state = AppState::new(
    ///     config.tokens.clone(),
    ///     PasswordHasher::new(config.bcrypt_cost),
    ///     config.uploads.clone(),
    ///     AccountStores { users: user_repo, admins: admin_repo },
    ///     Arc::new(CloudinaryStorage::new(config.storage.clone())),
    /// );
    /// ```
    pub fn new(
        tokens: TokenConfig,
        hasher: PasswordHasher,
        uploads: UploadConfig,
        stores: AccountStores,
        media: Arc<dyn MediaStorage>,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(tokens));
        let service = |kind: AccountKind, store: Arc<dyn AccountStore>| {
            Arc::new(AccountService::new(kind, store, media.clone(), tokens.clone(), hasher))
        };

        Self {
            users: service(AccountKind::User, stores.users),
            admins: service(AccountKind::Admin, stores.admins),
            uploads,
        }
    }

    pub fn accounts(&self, kind: AccountKind) -> Arc<AccountService> {
        match kind {
            AccountKind::User => self.users.clone(),
            AccountKind::Admin => self.admins.clone(),
        }
    }
}
