//! # 계정 리포지토리 구현
//!
//! [`AccountStore`]의 MongoDB 구현입니다.
//! 계정 종류마다 하나의 인스턴스가 만들어지며, 각각 `users` / `admins` 컬렉션을 사용합니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `username`, `email` 유니크 인덱스 + 삽입 전 중복 조회
//! - **원자적 갱신**: 모든 변경은 단일 문서 업데이트
//! - **CAS 토큰 교체**: `{ _id, refreshToken: expected }` 필터로 리프레시 토큰 회전

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::accounts::{Account, AccountKind};
use super::AccountStore;

/// MongoDB 계정 리포지토리
///
/// ## 컬렉션
///
/// - **컬렉션명**: `AccountKind::collection_name()` (`users`, `admins`)
/// - **인덱스**: email(unique), username(unique), createdAt(desc)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = AccountRepository::new(&database, AccountKind::User);
/// repo.create_indexes().await?;
///
/// let found = repo.find_by_username_or_email(Some("alice"), None).await?;
/// ```
pub struct AccountRepository {
    kind: AccountKind,
    collection: Collection<Account>,
}

impl AccountRepository {
    pub fn new(database: &Database, kind: AccountKind) -> Self {
        let collection = database
            .get_database()
            .collection::<Account>(kind.collection_name());

        Self { kind, collection }
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 서버 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 유지됩니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("{} 컬렉션 인덱스 준비 완료", self.kind.collection_name());
        Ok(())
    }

    fn parse_object_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid account id".to_string()))
    }

    /// `$set` 업데이트 후 변경된 문서를 반환합니다.
    async fn set_and_return(&self, id: &str, mut fields: Document) -> AppResult<Option<Account>> {
        let object_id = Self::parse_object_id(id)?;
        fields.insert("updatedAt", DateTime::now());

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_write_error)
    }

    async fn update_matched(&self, filter: Document, update: Document) -> AppResult<bool> {
        let result = self.collection
            .update_one(filter, update)
            .await
            .map_err(map_write_error)?;

        Ok(result.matched_count > 0)
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            debug!("잘못된 ObjectId 형식: {}", id);
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<Account>> {
        let mut conditions = Vec::new();
        if let Some(username) = username {
            conditions.push(doc! { "username": username });
        }
        if let Some(email) = email {
            conditions.push(doc! { "email": email });
        }

        if conditions.is_empty() {
            return Ok(None);
        }

        self.collection
            .find_one(doc! { "$or": conditions })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut account: Account) -> AppResult<Account> {
        if self
            .find_by_username_or_email(Some(&account.username), Some(&account.email))
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(format!(
                "{} with email or username already exists",
                self.kind.label()
            )));
        }

        let result = self.collection
            .insert_one(&account)
            .await
            .map_err(map_write_error)?;

        account.id = result.inserted_id.as_object_id();
        Ok(account)
    }

    async fn set_refresh_token(&self, id: &str, token: Option<&str>) -> AppResult<bool> {
        let object_id = Self::parse_object_id(id)?;
        let update = match token {
            Some(token) => doc! {
                "$set": { "refreshToken": token, "updatedAt": DateTime::now() }
            },
            None => doc! {
                "$unset": { "refreshToken": "" },
                "$set": { "updatedAt": DateTime::now() }
            },
        };

        self.update_matched(doc! { "_id": object_id }, update).await
    }

    async fn rotate_refresh_token(&self, id: &str, expected: &str, next: &str) -> AppResult<bool> {
        let object_id = Self::parse_object_id(id)?;

        self.update_matched(
            doc! { "_id": object_id, "refreshToken": expected },
            doc! { "$set": { "refreshToken": next, "updatedAt": DateTime::now() } },
        )
        .await
    }

    async fn set_password_hash(&self, id: &str, password_hash: &str) -> AppResult<bool> {
        let object_id = Self::parse_object_id(id)?;

        self.update_matched(
            doc! { "_id": object_id },
            doc! { "$set": { "password": password_hash, "updatedAt": DateTime::now() } },
        )
        .await
    }

    async fn update_profile(
        &self,
        id: &str,
        full_name: &str,
        email: &str,
    ) -> AppResult<Option<Account>> {
        if let Some(existing) = self.find_by_username_or_email(None, Some(email)).await? {
            if existing.id_string().as_deref() != Some(id) {
                return Err(AppError::ConflictError("Email is already in use".to_string()));
            }
        }

        self.set_and_return(id, doc! { "fullName": full_name, "email": email }).await
    }

    async fn set_avatar(&self, id: &str, url: &str) -> AppResult<Option<Account>> {
        self.set_and_return(id, doc! { "avatar": url }).await
    }

    async fn set_cover_image(&self, id: &str, url: &str) -> AppResult<Option<Account>> {
        self.set_and_return(id, doc! { "coverImage": url }).await
    }
}

/// 쓰기 에러 변환. 중복 키(11000)는 `ConflictError`가 됩니다.
fn map_write_error(err: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&err) {
        AppError::ConflictError("Email or username already exists".to_string())
    } else {
        AppError::DatabaseError(err.to_string())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    const DUPLICATE_KEY: i32 = 11000;

    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
