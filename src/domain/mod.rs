//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 계정 엔티티와 API 계약(DTO),
//! 요청 처리 중에만 쓰이는 모델을 담습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 Account, AccountKind
//! ├── DTOs      - 요청/응답 데이터 (ApiResponse envelope 포함)
//! └── Models    - JWT 클레임, 인증 계정, 업로드 파일
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB, Media Storage)
//! ```
//!
//! ## 보안 원칙
//!
//! `Account` 엔티티는 `password`(bcrypt 해시)와 `refreshToken`을 포함합니다.
//! 핸들러는 엔티티를 직접 직렬화하지 않고 항상 `AccountResponse`로 변환합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
