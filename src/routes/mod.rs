//! API 라우트 설정 모듈
//!
//! REST API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Routes
//!
//! - `PATCH /api/v1/users` - 사용자 부분 수정 입력
//! - `GET /api/v1/schema/update-user` - 입력 스키마 (필드 규칙 + GraphQL SDL)
//! - `GET /health` - 헬스체크
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(user_update_service)
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::config::Environment;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// `UserUpdateService`는 호출하는 쪽에서 `app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_schema_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X PATCH http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"userId":"u1","age":30}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(handlers::json_config())
            .service(handlers::users::update_user),
    );
}

fn configure_schema_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/schema")
            .service(handlers::schema::update_user_schema),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "update_user_input",
///   "version": "0.1.0",
///   "environment": "development",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": Environment::current().as_str(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
