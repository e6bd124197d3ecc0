//! Account Entity Implementation
//!
//! 사용자(user)와 관리자(admin) 계정을 표현하는 핵심 엔티티입니다.
//! 두 종류의 계정은 구조가 동일하며, 저장되는 컬렉션과 라우트 접두사만 다릅니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    User,
    Admin,
}

impl AccountKind {
    /// MongoDB 컬렉션 이름
    pub fn collection_name(&self) -> &'static str {
        match self {
            AccountKind::User => "users",
            AccountKind::Admin => "admins",
        }
    }

    /// 응답 메시지에 사용하는 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            AccountKind::User => "User",
            AccountKind::Admin => "Admin",
        }
    }

    /// 로그인 응답 본문에서 계정 정보를 담는 키
    pub fn response_key(&self) -> &'static str {
        match self {
            AccountKind::User => "user",
            AccountKind::Admin => "admin",
        }
    }

    /// API 라우트 스코프
    pub fn scope_path(&self) -> &'static str {
        match self {
            AccountKind::User => "/api/v1/users",
            AccountKind::Admin => "/api/v1/admin",
        }
    }
}

/// 계정 엔티티
///
/// MongoDB 문서 필드명은 camelCase(`fullName`, `coverImage`, `refreshToken`)를 사용합니다.
///
/// ## 불변 조건
///
/// - `username`, `email`은 컬렉션 내에서 유일하며 소문자로 정규화되어 저장됩니다.
/// - `password_hash`는 항상 bcrypt 해시입니다. 평문은 저장되지 않습니다.
/// - `refresh_token`은 가장 최근에 발급된 리프레시 토큰 하나만 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 계정 핸들 (unique, lowercase)
    pub username: String,
    /// 이메일 (unique, lowercase)
    pub email: String,
    /// 표시 이름
    pub full_name: String,
    /// 아바타 이미지 URL (필수)
    pub avatar: String,
    /// 커버 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    /// bcrypt 해시된 비밀번호
    #[serde(rename = "password")]
    pub password_hash: String,
    /// 현재 유효한 리프레시 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Account {
    /// 새 계정 생성
    ///
    /// `username`과 `email`은 호출자가 이미 정규화했다고 가정합니다.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        password_hash: String,
        avatar: String,
        cover_image: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
