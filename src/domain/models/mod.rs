//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델을 모아 둔 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    - 인증 미들웨어가 요청에 첨부하는 계정 (AuthenticatedAccount)
//! ├── media/   - 멀티파트 업로드 파일과 저장소 업로드 결과
//! └── token/   - JWT 클레임과 토큰 쌍
//! ```
//!
//! 엔티티(`entities`)와 달리 이 모듈의 타입은 MongoDB에 직접 저장되지 않습니다.
//! 요청 처리 중에만 존재하며 서비스 계층과 HTTP 계층 사이에서 전달됩니다.

pub mod auth;
pub mod media;
pub mod token;
