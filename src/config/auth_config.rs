//! # Authentication Configuration Module
//!
//! 액세스/리프레시 토큰 서명 비밀 값과 만료 시간, 인증 쿠키 이름을 관리합니다.
//!
//! ## 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-access-secret"
//! export ACCESS_TOKEN_EXPIRY="1d"
//! export REFRESH_TOKEN_SECRET="your-refresh-secret"
//! export REFRESH_TOKEN_EXPIRY="10d"
//! ```
//!
//! 만료 시간은 초 단위 숫자(`"3600"`) 또는 단위 접미사(`s`, `m`, `h`, `d`, `w`)를 붙인
//! 값(`"15m"`, `"1d"`)으로 지정합니다.

use std::env;
use chrono::Duration;
use crate::config::Environment;
use crate::core::errors::{AppError, AppResult};

/// 인증 쿠키 이름
pub struct AuthCookies;

impl AuthCookies {
    pub const ACCESS_TOKEN: &'static str = "accessToken";
    pub const REFRESH_TOKEN: &'static str = "refreshToken";
}

/// JWT 토큰 설정
///
/// 액세스 토큰과 리프레시 토큰은 서로 다른 비밀 값으로 서명됩니다.
/// 한쪽 비밀 값이 유출되어도 다른 종류의 토큰을 위조할 수 없습니다.
#[derive(Clone)]
pub struct TokenConfig {
    pub access_secret: String,
    pub access_expiry: Duration,
    pub refresh_secret: String,
    pub refresh_expiry: Duration,
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("access_expiry", &self.access_expiry)
            .field("refresh_expiry", &self.refresh_expiry)
            .finish_non_exhaustive()
    }
}

impl TokenConfig {
    pub const DEFAULT_ACCESS_EXPIRY: &'static str = "1d";
    pub const DEFAULT_REFRESH_EXPIRY: &'static str = "10d";

    /// 환경 변수에서 토큰 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 프로덕션에서 비밀 값이 없거나, 만료 시간 형식이 잘못된 경우
    pub fn from_env(environment: &Environment) -> AppResult<Self> {
        let access_secret = Self::secret("ACCESS_TOKEN_SECRET", environment)?;
        let refresh_secret = Self::secret("REFRESH_TOKEN_SECRET", environment)?;

        let access_expiry = parse_expiry(
            &env::var("ACCESS_TOKEN_EXPIRY")
                .unwrap_or_else(|_| Self::DEFAULT_ACCESS_EXPIRY.to_string()),
        )?;
        let refresh_expiry = parse_expiry(
            &env::var("REFRESH_TOKEN_EXPIRY")
                .unwrap_or_else(|_| Self::DEFAULT_REFRESH_EXPIRY.to_string()),
        )?;

        Ok(Self {
            access_secret,
            access_expiry,
            refresh_secret,
            refresh_expiry,
        })
    }

    fn secret(key: &str, environment: &Environment) -> AppResult<String> {
        match env::var(key) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ if environment.is_production() => Err(AppError::InternalError(format!(
                "{} must be set in production",
                key
            ))),
            _ => {
                log::warn!("{} not set, using default (not secure for production!)", key);
                Ok(format!("dev-{}", key.to_lowercase()))
            }
        }
    }
}

/// 만료 시간 문자열을 `Duration`으로 변환합니다.
///
/// ```rust,ignore
/// assert_eq!(parse_expiry("15m")?, Duration::minutes(15));
/// assert_eq!(parse_expiry("3600")?, Duration::seconds(3600));
/// ```
pub fn parse_expiry(raw: &str) -> AppResult<Duration> {
    let raw = raw.trim();
    let invalid = || AppError::InternalError(format!("잘못된 토큰 만료 시간 형식: '{}'", raw));

    let split_at = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, unit) = raw.split_at(split_at);

    let amount: i64 = amount.parse().map_err(|_| invalid())?;
    if amount <= 0 {
        return Err(invalid());
    }

    let duration = match unit.trim() {
        "" | "s" => Duration::try_seconds(amount),
        "m" => Duration::try_minutes(amount),
        "h" => Duration::try_hours(amount),
        "d" => Duration::try_days(amount),
        "w" => Duration::try_weeks(amount),
        _ => return Err(invalid()),
    };

    duration.ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expiry_units() {
        assert_eq!(parse_expiry("3600").unwrap(), Duration::seconds(3600));
        assert_eq!(parse_expiry("30s").unwrap(), Duration::seconds(30));
        assert_eq!(parse_expiry("15m").unwrap(), Duration::minutes(15));
        assert_eq!(parse_expiry("2h").unwrap(), Duration::hours(2));
        assert_eq!(parse_expiry("1d").unwrap(), Duration::days(1));
        assert_eq!(parse_expiry(" 10d ").unwrap(), Duration::days(10));
        assert_eq!(parse_expiry("1w").unwrap(), Duration::weeks(1));
    }

    #[test]
    fn test_parse_expiry_rejects_garbage() {
        assert!(parse_expiry("").is_err());
        assert!(parse_expiry("d").is_err());
        assert!(parse_expiry("0").is_err());
        assert!(parse_expiry("10y").is_err());
        assert!(parse_expiry("-5m").is_err());
    }

    #[test]
    fn test_parse_expiry_rejects_out_of_range() {
        assert!(matches!(
            parse_expiry("99999999999999d"),
            Err(AppError::InternalError(_))
        ));
        assert!(parse_expiry("99999999999999999w").is_err());
    }

    #[test]
    fn test_token_config_debug_hides_secrets() {
        let config = TokenConfig {
            access_secret: "top-secret-access".to_string(),
            access_expiry: Duration::minutes(15),
            refresh_secret: "top-secret-refresh".to_string(),
            refresh_expiry: Duration::days(10),
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("top-secret"));
    }
}
