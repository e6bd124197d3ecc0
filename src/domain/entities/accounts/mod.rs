//! 계정 엔티티 모듈
//!
//! [`Account`](account::Account)와 [`AccountKind`](account::AccountKind)를 제공합니다.

pub mod account;

pub use account::{Account, AccountKind};
