//! # 계정 관련 응답 DTO 모듈
//!
//! - `AccountResponse` - 비밀번호/리프레시 토큰이 제거된 계정 정보
//! - `LoginResponse` - 계정 정보 + 토큰 쌍
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "_id": "507f1f77bcf86cd799439011",
//!   "username": "alice",
//!   "email": "a@x.com",
//!   "fullName": "Alice",
//!   "avatar": "https://res.cloudinary.com/demo/image/upload/a.png",
//!   "coverImage": null,
//!   "createdAt": "2024-06-01T10:00:00Z",
//!   "updatedAt": "2024-06-07T12:00:00Z"
//! }
//! ```

pub mod account_response;

pub use account_response::{AccountResponse, LoginResponse};
