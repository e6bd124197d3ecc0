use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use crate::domain::entities::accounts::{Account, AccountKind};
use crate::domain::models::token::TokenPair;

/// 계정 응답 DTO (sanitized record)
///
/// 비밀번호 해시와 리프레시 토큰은 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub avatar: String,
    pub cover_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        let Account {
            id,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at,
            updated_at,
            ..
        } = account;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            full_name,
            avatar,
            cover_image,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 로그인 응답 DTO
///
/// 계정 정보는 계정 종류에 따라 `user` 또는 `admin` 키로 직렬화됩니다.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub kind: AccountKind,
    pub user: AccountResponse,
    pub access_token: String,
    pub refresh_token: String,
}

impl LoginResponse {
    pub fn new(kind: AccountKind, account: Account, tokens: TokenPair) -> Self {
        Self {
            kind,
            user: AccountResponse::from(account),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

impl Serialize for LoginResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry(self.kind.response_key(), &self.user)?;
        map.serialize_entry("accessToken", &self.access_token)?;
        map.serialize_entry("refreshToken", &self.refresh_token)?;
        map.end()
    }
}
