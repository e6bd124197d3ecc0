//! # Domain Entities
//!
//! MongoDB에 영속되는 핵심 도메인 객체들입니다.
//! 엔티티는 비밀번호 해시, 리프레시 토큰 등 민감한 필드를 포함하므로
//! 클라이언트 응답에는 항상 DTO(`AccountResponse`)로 변환하여 사용합니다.

pub mod accounts;
