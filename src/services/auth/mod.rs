//! 인증 관련 서비스
//!
//! - [`token_service`] - JWT 액세스/리프레시 토큰 발급과 검증
//! - [`password`] - bcrypt 비밀번호 해싱

pub mod token_service;
pub mod password;

pub use token_service::{TokenError, TokenService};
pub use password::PasswordHasher;
