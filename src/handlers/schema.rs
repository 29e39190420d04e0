//! 입력 스키마 조회 핸들러

use actix_web::{HttpResponse, get};

use crate::domain::dto::users::request::UPDATE_USER_SHAPE;

/// 사용자 수정 입력의 필드 규칙과 GraphQL SDL을 반환합니다.
///
/// `GET /api/v1/schema/update-user`
///
/// ```json
/// {
///   "name": "UpdateUserInput",
///   "fields": [
///     { "name": "userId", "type": "String", "required": true, "acceptsNull": false },
///     { "name": "age", "type": "Int", "required": false, "acceptsNull": false },
///     { "name": "isSubscribed", "type": "Boolean", "required": false, "acceptsNull": false }
///   ],
///   "sdl": "input UpdateUserInput {\n  userId: String!\n  age: Int\n  isSubscribed: Boolean\n}"
/// }
/// ```
#[get("/update-user")]
pub async fn update_user_schema() -> HttpResponse {
    HttpResponse::Ok().json(UPDATE_USER_SHAPE.describe())
}
