//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성과 검증을 담당합니다.
//! 두 토큰은 서로 다른 비밀 값(HS256)으로 서명되며, 리프레시 토큰의 저장과
//! 회전은 [`AccountService`](crate::services::accounts::AccountService)가 처리합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;
use crate::config::TokenConfig;
use crate::core::errors::AppError;
use crate::domain::entities::accounts::Account;
use crate::domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair};

/// 토큰 검증 실패
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// 서명 불일치, 만료 등
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// JWT 구조가 아니거나 클레임을 해석할 수 없음
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::InvalidToken(_) => {
                AppError::AuthenticationError("Invalid or expired token".to_string())
            }
            TokenError::MalformedToken(_) => {
                AppError::AuthenticationError("Malformed token".to_string())
            }
        }
    }
}

pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// 액세스 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `account` - 저장된 계정 (ID 필수)
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 계정 ID가 없거나 서명 실패
    pub fn generate_access_token(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessTokenClaims {
            id: Self::account_id(account)?,
            username: account.username.clone(),
            email: account.email.clone(),
            full_name: account.full_name.clone(),
            iat: now.timestamp(),
            exp: Self::expires_at(now, self.config.access_expiry)?,
        };

        Self::sign(&claims, &self.config.access_secret)
    }

    /// 리프레시 토큰 생성
    ///
    /// 계정 ID와 무작위 `jti`만 담습니다.
    pub fn generate_refresh_token(&self, account: &Account) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = RefreshTokenClaims {
            id: Self::account_id(account)?,
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: Self::expires_at(now, self.config.refresh_expiry)?,
        };

        Self::sign(&claims, &self.config.refresh_secret)
    }

    /// 액세스/리프레시 토큰 쌍 생성
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let pair = token_service.generate_token_pair(&account)?;
    /// store.set_refresh_token(&id, Some(&pair.refresh_token)).await?;
    /// ```
    pub fn generate_token_pair(&self, account: &Account) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(account)?,
            refresh_token: self.generate_refresh_token(account)?,
        })
    }

    pub fn verify_access_token(&self, token: &str) -> Result<AccessTokenClaims, TokenError> {
        Self::verify(token, &self.config.access_secret)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<RefreshTokenClaims, TokenError> {
        Self::verify(token, &self.config.refresh_secret)
    }

    /// Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만 추출합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = TokenService::extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// ```
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }

    /// 서명과 만료를 검증하고 클레임을 디코딩합니다.
    fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> Result<T, TokenError> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let validation = Validation::default();

        decode::<T>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature
                | ErrorKind::InvalidSignature
                | ErrorKind::ImmatureSignature
                | ErrorKind::InvalidAlgorithm => TokenError::InvalidToken(e.to_string()),
                _ => TokenError::MalformedToken(e.to_string()),
            })
    }

    fn sign<T: Serialize>(claims: &T, secret: &str) -> Result<String, AppError> {
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());

        encode(&Header::default(), claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 발급 시각에 만료 기간을 더한 UNIX 타임스탬프
    fn expires_at(now: DateTime<Utc>, expiry: Duration) -> Result<i64, AppError> {
        now.checked_add_signed(expiry)
            .map(|exp| exp.timestamp())
            .ok_or_else(|| AppError::InternalError("토큰 만료 시각 계산 범위 초과".to_string()))
    }

    fn account_id(account: &Account) -> Result<String, AppError> {
        account
            .id_string()
            .ok_or_else(|| AppError::InternalError("계정 ID가 없습니다".to_string()))
    }
}
