//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 기반 타입을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 (`thiserror`)
//! - **HTTP 통합**: `actix_web::ResponseError` 구현으로 실패 envelope 자동 생성
//! - **ErrorContext**: `Result`에 문맥 메시지를 붙이는 확장 트레이트
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: `main`에서 조립한 계정 서비스와 업로드 설정
//! - **AccountStores**: 계정 종류별 저장소 주입 지점
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::{AppError, AppState};
//!
//! let state = AppState::new(tokens, hasher, uploads, stores, media);
//! HttpServer::new(move || {
//!     let state = state.clone();
//!     App::new().configure(move |cfg| configure_all_routes(cfg, &state))
//! });
//! ```

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::{AccountStores, AppState};
