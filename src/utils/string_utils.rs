//! # 문자열 유틸리티
//!
//! 요청 입력 정리와 검증 메시지 조립에 쓰이는 공통 함수들입니다.

use validator::ValidationErrors;
use crate::core::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 값이 없거나 공백뿐이면 ValidationError를 반환하고,
/// 유효한 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열 (멀티파트 필드가 없으면 `None`)
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string(Some("  Hello  "), "fullName").unwrap(), "Hello");
/// assert!(validate_required_string(Some("   "), "fullName").is_err());
/// assert!(validate_required_string(None, "fullName").is_err());
/// ```
pub fn validate_required_string(value: Option<&str>, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// 값이 없거나 공백뿐이면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<&str>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 계정 핸들/이메일 정규화 (trim + 소문자)
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

/// validator 에러를 클라이언트용 메시지 하나로 합칩니다.
///
/// 필드 이름 순으로 정렬되며, 스키마 검증(`__all__`) 메시지도 포함됩니다.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    if messages.is_empty() {
        "Invalid request".to_string()
    } else {
        messages.join(", ")
    }
}
