use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 로그인 요청 DTO
///
/// `username`(관리자는 `adminname`) 또는 `email` 중 하나와 `password`가 필요합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_identifier_present"))]
pub struct LoginRequest {
    #[serde(default, alias = "adminname")]
    pub username: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

fn validate_identifier_present(req: &LoginRequest) -> Result<(), ValidationError> {
    let present = |value: &Option<String>| {
        value.as_deref().map(|v| !v.trim().is_empty()).unwrap_or(false)
    };

    if !present(&req.username) && !present(&req.email) {
        return Err(ValidationError::new("identifier_required")
            .with_message("username or email is required".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_username_or_email() {
        let req: LoginRequest = serde_json::from_str(r#"{"password":"p1"}"#).unwrap();
        assert!(req.validate().is_err());

        let req: LoginRequest =
            serde_json::from_str(r#"{"email":"a@x.com","password":"p1"}"#).unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_accepts_adminname_alias() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"adminname":"root","password":"p1"}"#).unwrap();

        assert_eq!(req.username.as_deref(), Some("root"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_requires_password() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"alice"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
