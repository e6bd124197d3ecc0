use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 비밀번호 변경 요청 DTO
///
/// 이전 클라이언트 호환을 위해 소문자 필드명(`oldpassword`, `newpassword`, `confpassword`)도 받습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_passwords_match"))]
pub struct ChangePasswordRequest {
    #[serde(default, alias = "oldpassword")]
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,

    #[serde(default, alias = "newpassword")]
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,

    #[serde(default, alias = "confpassword")]
    pub confirm_password: String,
}

/// 새 비밀번호와 확인 값 일치 여부 검증
fn validate_passwords_match(req: &ChangePasswordRequest) -> Result<(), ValidationError> {
    if req.new_password != req.confirm_password {
        return Err(ValidationError::new("passwords_mismatch")
            .with_message("New password and confirm password do not match".into()));
    }
    Ok(())
}

/// 리프레시 토큰 요청 본문
///
/// 쿠키에 `refreshToken`이 없을 때만 사용됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_confirmation_is_rejected() {
        let req: ChangePasswordRequest = serde_json::from_str(
            r#"{"oldPassword":"p1","newPassword":"p2","confirmPassword":"p3"}"#,
        )
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.to_string().contains("do not match"));
    }

    #[test]
    fn test_lowercase_aliases() {
        let req: ChangePasswordRequest = serde_json::from_str(
            r#"{"oldpassword":"p1","newpassword":"p2","confpassword":"p2"}"#,
        )
        .unwrap();

        assert_eq!(req.old_password, "p1");
        assert!(req.validate().is_ok());
    }
}
