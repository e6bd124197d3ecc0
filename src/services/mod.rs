//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스 계층입니다.
//!
//! ## 모듈 구성
//!
//! - [`accounts`] - 계정 등록/로그인/토큰 갱신/프로필 수정 (`AccountService`)
//! - [`auth`] - JWT 토큰 서비스와 bcrypt 비밀번호 해셔
//! - [`storage`] - 외부 미디어 저장소 업로드 (`MediaStorage`)
//!
//! 서비스는 `main`에서 한 번 생성되어 `AppState`를 통해 라우트에 전달됩니다.
//! 계정 종류(`AccountKind`)마다 `AccountService` 인스턴스가 하나씩 존재합니다.

pub mod accounts;
pub mod auth;
pub mod storage;
