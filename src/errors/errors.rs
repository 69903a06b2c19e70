//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 게이트웨이와 두 도메인 서비스(사용자, 블로그)가 공유하는 에러 분류입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 컴포넌트가
//! 동일한 JSON 에러 본문(`{"code": ..., "error": ...}`)을 주고받습니다.
//!
//! 게이트웨이는 이 본문의 `code`를 읽어 하위 서비스의 에러 분류를
//! 그대로 복원하므로, 서비스 간 경계에서도 분류가 손실되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn find_post(id: i64) -> Result<PostRecord, AppError> {
//!     store.get(id).ok_or_else(|| AppError::NotFound(format!("게시글 {}을(를) 찾을 수 없습니다", id)))
//! }
//! ```

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 각 변형은 외부로 노출되는 하나의 에러 분류에 대응합니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 하위 서비스 연결 실패 (503 Service Unavailable)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// 하위 서비스 호출 기한 초과 (504 Gateway Timeout)
    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// 서비스 간 전송되는 에러 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub error: String,
}

impl AppError {
    /// 와이어 포맷에서 사용하는 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "INVALID_ARGUMENT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "ALREADY_EXISTS",
            AppError::AuthenticationError(_) => "UNAUTHENTICATED",
            AppError::AuthorizationError(_) => "PERMISSION_DENIED",
            AppError::ServiceUnavailable(_) => "UNAVAILABLE",
            AppError::DeadlineExceeded(_) => "DEADLINE_EXCEEDED",
            AppError::InternalError(_) => "INTERNAL",
        }
    }

    /// 하위 서비스의 에러 본문을 `AppError`로 복원합니다.
    ///
    /// 도메인 분류(InvalidArgument, AlreadyExists, Unauthenticated,
    /// PermissionDenied, NotFound)만 그대로 통과시키고, 나머지는 모두
    /// 내부 세부정보를 제거한 `InternalError`로 접습니다.
    pub fn from_downstream(status: StatusCode, body: Option<ErrorBody>) -> Self {
        let (code, message) = match body {
            Some(body) => (body.code, body.error),
            None => (String::new(), String::new()),
        };

        match (code.as_str(), status) {
            ("INVALID_ARGUMENT", _) | (_, StatusCode::BAD_REQUEST) => AppError::ValidationError(message),
            ("ALREADY_EXISTS", _) | (_, StatusCode::CONFLICT) => AppError::ConflictError(message),
            ("UNAUTHENTICATED", _) | (_, StatusCode::UNAUTHORIZED) => AppError::AuthenticationError(message),
            ("PERMISSION_DENIED", _) | (_, StatusCode::FORBIDDEN) => AppError::AuthorizationError(message),
            ("NOT_FOUND", _) | (_, StatusCode::NOT_FOUND) => AppError::NotFound(message),
            _ => AppError::InternalError(format!("하위 서비스 응답 {}: {}", status, message)),
        }
    }

    /// 분류 접두어 없이 감싼 메시지만 반환합니다.
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ServiceUnavailable(msg)
            | AppError::DeadlineExceeded(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 클라이언트에게 돌려줄 메시지
    ///
    /// 5xx 계열은 로그에만 세부 내용을 남기고 일반 메시지만 반환합니다.
    fn public_message(&self) -> String {
        match self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            AppError::ServiceUnavailable(_) => "Service unavailable".to_string(),
            AppError::DeadlineExceeded(_) => "Deadline exceeded".to_string(),
            other => other.message().to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DeadlineExceeded(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        actix_web::HttpResponse::build(status).json(ErrorBody {
            code: self.code().to_string(),
            error: self.public_message(),
        })
    }
}

/// 외부 라이브러리 에러를 `InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지를 앞에 붙여 에러를 변환합니다.
    fn context(self, msg: &str) -> Result<T, AppError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
