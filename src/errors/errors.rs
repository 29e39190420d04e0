//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 에러를
//! 하나의 JSON 형식으로 응답합니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "error": "Invalid input: userId",
//!   "details": { "userId": ["required"] }
//! }
//! ```
//!
//! `details`는 필드 단위 검증 실패(`InvalidInput`)에만 포함됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let update = request.into_update().map_err(AppError::InvalidInput)?;
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use thiserror::Error;
use validator::ValidationErrors;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 형식이 잘못된 요청 본문 등 일반 입력 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 실패 (400 Bad Request)
    #[error("Invalid input: {}", failing_fields(.0).join(", "))]
    InvalidInput(ValidationErrors),
}

impl AppError {
    /// 필드 이름 → 실패한 규칙 코드 목록
    pub fn details(&self) -> Option<BTreeMap<String, Vec<String>>> {
        match self {
            AppError::InvalidInput(errors) => Some(
                errors
                    .field_errors()
                    .iter()
                    .map(|(field, errs)| {
                        let codes = errs.iter().map(|e| e.code.to_string()).collect();
                        (field.to_string(), codes)
                    })
                    .collect(),
            ),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidInput(errors)
    }
}

/// 실패한 필드 이름을 정렬해서 반환합니다.
fn failing_fields(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    fields
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self.details() {
            Some(details) => serde_json::json!({
                "error": self.to_string(),
                "details": details,
            }),
            None => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
