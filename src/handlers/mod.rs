//! # HTTP Handlers
//!
//! HTTP 요청을 파싱하고 서비스 계층을 호출한 뒤 응답 envelope으로 감싸는 어댑터들입니다.
//!
//! - [`accounts`] - 등록, 로그인, 로그아웃, 토큰 갱신, 비밀번호 변경, 프로필/이미지 수정

pub mod accounts;
