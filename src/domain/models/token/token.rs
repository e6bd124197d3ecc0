//! JWT 토큰 클레임 구조체 및 토큰 쌍
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 클레임 집합과 서명 비밀 값을 사용합니다.
use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
///
/// 보호된 API 호출 시 계정 식별에 필요한 정보를 담습니다.
///
/// ## 클레임 구성
///
/// - `_id`: 계정 ObjectId (hex)
/// - `username`, `email`, `fullName`: 발급 시점의 계정 정보
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenClaims {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
}

/// 리프레시 토큰 클레임
///
/// 계정 식별자만 포함합니다. `jti`는 같은 초에 발급된 두 토큰을 구분합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    #[serde(rename = "_id")]
    pub id: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 액세스/리프레시 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}
