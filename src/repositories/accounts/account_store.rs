//! # Credential Store 추상화
//!
//! 계정 레코드 저장소가 구현해야 하는 연산을 정의합니다.
//! 운영 환경에서는 [`AccountRepository`](super::AccountRepository)(MongoDB)를,
//! 테스트에서는 메모리 저장소를 주입합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::accounts::Account;

/// 계정 저장소 트레이트
///
/// 모든 `id` 인자는 MongoDB ObjectId의 16진수 문자열입니다.
/// 변경 연산은 항상 `updatedAt`을 갱신합니다.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// ID로 계정 조회. 형식이 잘못된 ID는 `None`으로 취급합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>>;

    /// 핸들 또는 이메일이 일치하는 계정 조회
    ///
    /// 두 값이 모두 `None`이면 `Ok(None)`을 반환합니다.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>>;

    /// 새 계정 저장
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 핸들 또는 이메일 중복
    async fn insert(&self, account: Account) -> AppResult<Account>;

    /// 저장된 리프레시 토큰을 덮어쓰거나(`Some`) 제거(`None`)합니다.
    ///
    /// 계정이 존재하면 `true`를 반환합니다.
    async fn set_refresh_token(&self, id: &str, token: Option<&str>) -> AppResult<bool>;

    /// 저장된 리프레시 토큰이 `expected`일 때만 `next`로 교체합니다.
    ///
    /// 동시에 같은 토큰으로 갱신을 요청하면 하나만 `true`를 받습니다.
    async fn rotate_refresh_token(&self, id: &str, expected: &str, next: &str) -> AppResult<bool>;

    /// 비밀번호 해시 교체
    async fn set_password_hash(&self, id: &str, password_hash: &str) -> AppResult<bool>;

    /// 표시 이름과 이메일 변경
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 다른 계정이 이미 사용 중인 이메일
    async fn update_profile(
        &self,
        id: &str,
        full_name: &str,
        email: &str,
    ) -> AppResult<Option<Account>>;

    async fn set_avatar(&self, id: &str, url: &str) -> AppResult<Option<Account>>;

    async fn set_cover_image(&self, id: &str, url: &str) -> AppResult<Option<Account>>;
}
