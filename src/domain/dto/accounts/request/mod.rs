//! # 계정 관련 요청 DTO 모듈
//!
//! | 타입 | 엔드포인트 | 본문 |
//! |------|------------|------|
//! | `RegisterAccountRequest` | `POST /register` | multipart |
//! | `LoginRequest` | `POST /login` | JSON |
//! | `RefreshTokenRequest` | `POST /refresh-token` | JSON (선택) |
//! | `ChangePasswordRequest` | `POST /change-password` | JSON |
//! | `UpdateAccountRequest` | `PATCH /update-account` | JSON |

pub mod register_request;
pub mod login_request;
pub mod password_request;
pub mod update_account_request;

pub use register_request::{NewAccount, RegisterAccountRequest};
pub use login_request::LoginRequest;
pub use password_request::{ChangePasswordRequest, RefreshTokenRequest};
pub use update_account_request::UpdateAccountRequest;
