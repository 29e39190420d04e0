//! # User Update HTTP Handlers
//!
//! 사용자 부분 수정 입력을 받는 HTTP 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `PATCH` | `/api/v1/users` | 사용자 부분 수정 입력 검증 및 전달 | 200 OK / 400 Bad Request |
//!
//! ## 에러 응답
//!
//! ```json
//! {
//!   "error": "Invalid input: userId",
//!   "details": { "userId": ["required"] }
//! }
//! ```

use actix_web::{HttpResponse, patch, web};
use serde_json::Value;

use crate::domain::dto::users::response::UpdateUserResponse;
use crate::errors::AppError;
use crate::services::users::UserUpdateService;

/// 사용자 수정 핸들러
///
/// 본문은 타입 없는 JSON으로 받아 서비스에서 필드 규칙을 적용합니다.
/// 그래야 타입 오류와 누락 필드가 하나의 응답에 함께 보고됩니다.
///
/// # 요청 본문
///
/// ```json
/// { "userId": "u1", "age": 30, "isSubscribed": false }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"userId": "u1", "isSubscribed": true}'
/// ```
#[patch("")]
pub async fn update_user(
    service: web::Data<UserUpdateService>,
    payload: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let update = service.update_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UpdateUserResponse::from(update)))
}
