use actix_web::http::StatusCode;
use serde::Serialize;

/// 성공 응답 envelope
///
/// 모든 성공 응답은 `{ statusCode, data, message, success }` 형태로 감싸집니다.
/// 실패 응답은 [`ErrorEnvelope`](crate::core::errors::ErrorEnvelope)를 사용합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(status: StatusCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.into(),
            success: status.as_u16() < 400,
        }
    }

    /// 200 OK
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    /// 201 Created
    pub fn created(data: T, message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

/// 데이터가 없는 응답의 `data` 자리 (`{}`로 직렬화)
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(ApiResponse::created(Empty {}, "done")).unwrap();

        assert_eq!(json["statusCode"], 201);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "done");
        assert!(json["data"].as_object().unwrap().is_empty());
    }
}
