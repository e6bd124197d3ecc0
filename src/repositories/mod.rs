//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`AccountStore`](accounts::AccountStore) 트레이트 뒤에 MongoDB 구현을 숨깁니다.
//! 서비스 계층은 `Arc<dyn AccountStore>`만 알고 있으므로 테스트에서 메모리 저장소로 바꿔 끼울 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountRepository, AccountStore};
//!
//! let repo = AccountRepository::new(&database, AccountKind::Admin);
//! let admin = repo.find_by_username_or_email(None, Some("root@example.com")).await?;
//! ```

pub mod accounts;
