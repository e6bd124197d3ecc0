use validator::ValidateEmail;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::media::UploadedFile;
use crate::utils::string_utils::{normalize_identifier, validate_required_string};

/// 계정 등록 요청
///
/// 멀티파트 본문에서 조립됩니다. 텍스트 필드는 공백 제거 전 원본 값이며,
/// [`validate`](Self::validate)가 정규화된 [`NewAccount`]를 돌려줍니다.
#[derive(Debug, Clone, Default)]
pub struct RegisterAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// `username` 또는 `adminname` 필드 값
    pub username: Option<String>,
    pub password: Option<String>,
    pub avatar: Option<UploadedFile>,
    pub cover_image: Option<UploadedFile>,
}

/// 검증을 통과한 등록 입력
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub username: String,
    pub password: String,
}

impl RegisterAccountRequest {
    /// 필수 텍스트 필드를 검증하고 정규화합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 필드가 비었거나 이메일 형식이 잘못된 경우
    pub fn validate(&self) -> AppResult<NewAccount> {
        let full_name = validate_required_string(self.full_name.as_deref(), "fullName")?;
        let email = validate_required_string(self.email.as_deref(), "email")?;
        let username = validate_required_string(self.username.as_deref(), "username")?;
        let password = self.password.clone().unwrap_or_default();
        if password.trim().is_empty() {
            return Err(AppError::ValidationError("All fields are required".to_string()));
        }

        let email = normalize_identifier(&email);
        if !email.validate_email() {
            return Err(AppError::ValidationError("Email is invalid".to_string()));
        }

        Ok(NewAccount {
            full_name,
            email,
            username: normalize_identifier(&username),
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterAccountRequest {
        RegisterAccountRequest {
            full_name: Some(" Alice ".to_string()),
            email: Some(" A@X.com ".to_string()),
            username: Some("Alice".to_string()),
            password: Some("p1".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_normalizes_fields() {
        let input = request().validate().unwrap();

        assert_eq!(input.full_name, "Alice");
        assert_eq!(input.email, "a@x.com");
        assert_eq!(input.username, "alice");
        assert_eq!(input.password, "p1");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut req = request();
        req.username = Some("   ".to_string());
        assert!(matches!(req.validate(), Err(AppError::ValidationError(_))));

        let mut req = request();
        req.password = None;
        assert!(matches!(req.validate(), Err(AppError::ValidationError(_))));

        let mut req = request();
        req.password = Some("   ".to_string());
        assert!(matches!(req.validate(), Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validate_keeps_password_untrimmed() {
        let mut req = request();
        req.password = Some(" p1 ".to_string());

        assert_eq!(req.validate().unwrap().password, " p1 ");
    }

    #[test]
    fn test_validate_rejects_malformed_email() {
        let mut req = request();
        req.email = Some("not-an-email".to_string());
        assert!(matches!(req.validate(), Err(AppError::ValidationError(_))));
    }
}
