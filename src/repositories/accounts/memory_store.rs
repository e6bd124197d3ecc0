//! 테스트용 메모리 계정 저장소

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::accounts::Account;
use super::AccountStore;

/// `HashMap` 기반 [`AccountStore`]
///
/// 유니크 제약과 CAS 교체를 MongoDB 구현과 같은 의미로 흉내 냅니다.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<ObjectId, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 저장된 원본 레코드 (비밀번호 해시, 리프레시 토큰 포함)
    pub fn raw(&self, id: &str) -> Option<Account> {
        let id = ObjectId::parse_str(id).ok()?;
        self.accounts.read().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.accounts.read().unwrap().len()
    }

    fn modify<F>(&self, id: &str, f: F) -> Option<Account>
    where
        F: FnOnce(&mut Account) -> bool,
    {
        let id = ObjectId::parse_str(id).ok()?;
        let mut accounts = self.accounts.write().unwrap();
        let account = accounts.get_mut(&id)?;
        if f(account) {
            account.updated_at = DateTime::now();
            Some(account.clone())
        } else {
            None
        }
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.raw(id))
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let accounts = self.accounts.read().unwrap();
        Ok(accounts
            .values()
            .find(|a| {
                username.is_some_and(|u| a.username == u) || email.is_some_and(|e| a.email == e)
            })
            .cloned())
    }

    async fn insert(&self, mut account: Account) -> AppResult<Account> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts
            .values()
            .any(|a| a.username == account.username || a.email == account.email)
        {
            return Err(AppError::ConflictError(
                "Account with email or username already exists".to_string(),
            ));
        }

        let id = ObjectId::new();
        account.id = Some(id);
        accounts.insert(id, account.clone());
        Ok(account)
    }

    async fn set_refresh_token(&self, id: &str, token: Option<&str>) -> AppResult<bool> {
        Ok(self
            .modify(id, |a| {
                a.refresh_token = token.map(str::to_string);
                true
            })
            .is_some())
    }

    async fn rotate_refresh_token(&self, id: &str, expected: &str, next: &str) -> AppResult<bool> {
        Ok(self
            .modify(id, |a| {
                if a.refresh_token.as_deref() != Some(expected) {
                    return false;
                }
                a.refresh_token = Some(next.to_string());
                true
            })
            .is_some())
    }

    async fn set_password_hash(&self, id: &str, password_hash: &str) -> AppResult<bool> {
        Ok(self
            .modify(id, |a| {
                a.password_hash = password_hash.to_string();
                true
            })
            .is_some())
    }

    async fn update_profile(
        &self,
        id: &str,
        full_name: &str,
        email: &str,
    ) -> AppResult<Option<Account>> {
        let taken = self
            .find_by_username_or_email(None, Some(email))
            .await?
            .is_some_and(|a| a.id_string().as_deref() != Some(id));
        if taken {
            return Err(AppError::ConflictError("Email is already in use".to_string()));
        }

        Ok(self.modify(id, |a| {
            a.full_name = full_name.to_string();
            a.email = email.to_string();
            true
        }))
    }

    async fn set_avatar(&self, id: &str, url: &str) -> AppResult<Option<Account>> {
        Ok(self.modify(id, |a| {
            a.avatar = url.to_string();
            true
        }))
    }

    async fn set_cover_image(&self, id: &str, url: &str) -> AppResult<Option<Account>> {
        Ok(self.modify(id, |a| {
            a.cover_image = Some(url.to_string());
            true
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, email: &str) -> Account {
        Account::new(
            username.to_string(),
            email.to_string(),
            "Name".to_string(),
            "hash".to_string(),
            "https://media.test/a.png".to_string(),
            None,
        )
    }

    #[actix_web::test]
    async fn test_insert_enforces_uniqueness() {
        let store = InMemoryAccountStore::new();
        store.insert(account("alice", "a@x.com")).await.unwrap();

        let dup_name = store.insert(account("alice", "b@x.com")).await;
        let dup_email = store.insert(account("bob", "a@x.com")).await;

        assert!(matches!(dup_name, Err(AppError::ConflictError(_))));
        assert!(matches!(dup_email, Err(AppError::ConflictError(_))));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_rotate_refresh_token_compare_and_swap() {
        let store = InMemoryAccountStore::new();
        let saved = store.insert(account("alice", "a@x.com")).await.unwrap();
        let id = saved.id_string().unwrap();
        store.set_refresh_token(&id, Some("first")).await.unwrap();

        assert!(store.rotate_refresh_token(&id, "first", "second").await.unwrap());
        assert!(!store.rotate_refresh_token(&id, "first", "third").await.unwrap());
        assert_eq!(store.raw(&id).unwrap().refresh_token.as_deref(), Some("second"));
    }
}
