//! # Application Error Handling System
//!
//! 계정 서비스 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며,
//! `actix_web::ResponseError` 구현을 통해 실패 응답 envelope으로 자동 변환됩니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 입력 누락, 잘못된 형식 |
//! | `AuthenticationError` | 401 Unauthorized | 잘못된 자격 증명, 토큰 오류 |
//! | `AuthorizationError` | 403 Forbidden | 권한 부족 |
//! | `NotFound` | 404 Not Found | 계정 없음 |
//! | `ConflictError` | 409 Conflict | 중복 username / email |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | 미디어 업로드 실패 |
//! | `InternalError` | 500 Internal Server Error | 토큰 생성 실패 등 |
//!
//! ## 실패 응답 형식
//!
//! ```json
//! {
//!   "statusCode": 409,
//!   "message": "User with email or username already exists",
//!   "success": false,
//!   "errors": []
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 계층(데이터, 비즈니스, 프레젠테이션)에 관계없이 모든 실패는 이 타입으로 수렴합니다.
///
/// ## 에러 변환 패턴
///
/// ```rust,ignore
/// // MongoDB 에러 변환
/// collection.find_one(filter).await
///     .map_err(|e| AppError::DatabaseError(e.to_string()))?;
///
/// // 외부 API 에러 변환
/// client.post(url).send().await
///     .map_err(|e| AppError::ExternalServiceError(e.to_string()))?;
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    ///
    /// 원인 메시지는 서버 로그에만 남고 클라이언트에는 일반 메시지가 전달됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401)
    ///
    /// # 발생 시나리오
    /// - 잘못된 비밀번호
    /// - 누락되었거나 만료된 액세스 토큰
    /// - 이미 교체(rotation)된 리프레시 토큰 재사용
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    ///
    /// `DatabaseError`의 원인 메시지는 내부 정보(쿼리, 호스트 등)를 포함할 수 있으므로
    /// 일반 메시지로 대체합니다.
    pub fn client_message(&self) -> &str {
        match self {
            AppError::DatabaseError(_) => "Internal server error",
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ExternalServiceError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }
}

/// 실패 응답 envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope<'a> {
    pub status_code: u16,
    pub message: &'a str,
    pub success: bool,
    pub errors: Vec<String>,
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 원인을 서버 로그에 기록한 뒤 envelope으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        } else {
            log::debug!("요청 거부: {}", self);
        }

        HttpResponse::build(status).json(ErrorEnvelope {
            status_code: status.as_u16(),
            message: self.client_message(),
            success: false,
            errors: Vec::new(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
