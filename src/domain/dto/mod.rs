//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//! 엔티티와 DTO를 분리하여 비밀번호 해시나 리프레시 토큰 같은 내부 필드가
//! 응답에 섞여 나가지 않도록 합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── accounts/
//! │   ├── request/     # 등록, 로그인, 비밀번호 변경, 계정 수정, 토큰 갱신
//! │   └── response/    # AccountResponse, LoginResponse
//! └── common/
//!     └── api_response.rs  # 성공 응답 envelope
//! ```
//!
//! ## 변환 패턴
//!
//! - **Entity → Response**: `impl From<Account> for AccountResponse`
//! - **Request 검증**: `validator::Validate` derive, 또는 멀티파트 요청은 수동 검증 후 `NewAccount`

pub mod accounts;
pub mod common;

pub use accounts::*;
pub use common::*;
