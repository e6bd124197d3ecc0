//! # HTTP 미들웨어
//!
//! - [`auth_middleware`] - 액세스 토큰 검증 후 계정을 요청에 첨부하는 `AuthMiddleware`

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
