//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 및 처리기 전달                    ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Domain - 입력 형태, DTO                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 수정 입력 (`PATCH /api/v1/users`)
//! - **`schema`**: 입력 스키마 조회 (`GET /api/v1/schema/update-user`)

pub mod schema;
pub mod users;

use actix_web::{HttpRequest, error, web};

use crate::errors::AppError;

/// JSON 본문 추출 실패를 `AppError` 응답 형식으로 바꾸는 설정
///
/// 잘못된 JSON, Content-Type 누락 등이 모두 400 `{"error": "..."}`으로 응답됩니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("JSON 본문 파싱 실패: {}", err);
    AppError::ValidationError(err.to_string()).into()
}
