//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 모든 설정은 애플리케이션 시작 시 한 번 [`AppConfig::from_env`]로 읽혀
//! 명시적으로 전달됩니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, CORS, 미디어 저장소, 환경 설정
//! - [`auth_config`] - JWT 토큰, 인증 쿠키 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export CORS_ORIGIN="https://app.example.com"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_service"
//!
//! # 토큰
//! export ACCESS_TOKEN_SECRET="..."
//! export ACCESS_TOKEN_EXPIRY="1d"
//! export REFRESH_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_EXPIRY="10d"
//!
//! # 미디어 저장소
//! export CLOUDINARY_CLOUD_NAME="..."
//! export CLOUDINARY_API_KEY="..."
//! export CLOUDINARY_API_SECRET="..."
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::core::errors::AppResult;

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub bind_address: String,
    pub cors_origins: CorsOrigins,
    pub database: DatabaseConfig,
    pub tokens: TokenConfig,
    pub storage: StorageConfig,
    pub uploads: UploadConfig,
    pub rate_limit: RateLimitConfig,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::current();

        Ok(Self {
            bind_address: ServerConfig::bind_address(),
            cors_origins: CorsOrigins::from_env(),
            database: DatabaseConfig::from_env(),
            tokens: TokenConfig::from_env(&environment)?,
            storage: StorageConfig::from_env(),
            uploads: UploadConfig::from_env(),
            rate_limit: RateLimitConfig::from_env(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(&environment),
            environment,
        })
    }
}
