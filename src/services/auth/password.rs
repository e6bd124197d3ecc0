//! bcrypt 비밀번호 해싱

use crate::core::errors::{AppError, ErrorContext};

/// 비밀번호 해셔
///
/// 비용(cost)은 환경별로 다릅니다. 개발/테스트 4, 스테이징 10, 운영 12.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문 비밀번호를 bcrypt 해시로 변환합니다.
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        bcrypt::hash(password, self.cost).context("비밀번호 해싱 실패")
    }

    /// 평문과 저장된 해시를 비교합니다.
    ///
    /// 저장된 해시가 손상된 경우 `InternalError`를 반환합니다.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        bcrypt::verify(password, hash).context("비밀번호 검증 실패")
    }
}
