//! # Utilities Module
//!
//! 여러 계층에서 공유하는 작은 헬퍼 함수들입니다.
//!
//! - [`string_utils`] - 입력 문자열 정리, 식별자 정규화, 검증 메시지 조립

pub mod string_utils;
