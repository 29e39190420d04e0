//! # 사용자 수정 서비스
//!
//! 원시 JSON 본문을 받아 검증하고, 통과한 입력만 처리기로 넘깁니다.
//!
//! ```text
//! JSON body ──▶ UPDATE_USER_SHAPE.validate_object ──▶ serde ──▶ Validate
//!                    │ (필드 에러 수집)                              │
//!                    ▼                                               ▼
//!              AppError::InvalidInput                    UserUpdateHandler::handle
//! ```
//!
//! 처리기에 도달하기 전에 거부된 요청은 부수 효과가 없습니다.

use std::sync::Arc;

use log::{debug, warn};
use serde_json::Value;

use crate::domain::dto::users::request::{UPDATE_USER_SHAPE, UpdateUserRequest, UserUpdate};
use crate::errors::{AppError, AppResult};
use crate::services::users::update_handler::UserUpdateHandler;

/// 사용자 수정 요청을 검증하고 처리기로 전달하는 서비스
#[derive(Clone)]
pub struct UserUpdateService {
    handler: Arc<dyn UserUpdateHandler>,
}

impl UserUpdateService {
    pub fn new(handler: Arc<dyn UserUpdateHandler>) -> Self {
        Self { handler }
    }

    /// 원시 JSON 값을 검증된 `UserUpdate`로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 본문이 JSON 객체가 아닌 경우
    /// * `AppError::InvalidInput` - 필드 규칙을 어긴 경우 (모든 실패 필드 포함)
    pub fn validate(&self, body: Value) -> AppResult<UserUpdate> {
        let Value::Object(object) = body else {
            return Err(AppError::ValidationError(
                "요청 본문은 JSON 객체여야 합니다".to_string(),
            ));
        };

        UPDATE_USER_SHAPE
            .validate_object(&object)
            .inspect_err(log_rejection)?;

        let request: UpdateUserRequest = serde_json::from_value(Value::Object(object))
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let update = request.into_update().inspect_err(log_rejection)?;
        debug!("사용자 수정 입력 검증 통과: {}", update.user_id);

        Ok(update)
    }

    /// 검증 후 처리기를 호출합니다.
    pub async fn update_user(&self, body: Value) -> AppResult<UserUpdate> {
        let update = self.validate(body)?;
        self.handler.handle(update).await
    }
}

fn log_rejection(errors: &validator::ValidationErrors) {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    warn!("사용자 수정 입력 거부: {}", fields.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::users::update_handler::PassThroughUpdateHandler;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl UserUpdateHandler for CountingHandler {
        async fn handle(&self, update: UserUpdate) -> AppResult<UserUpdate> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(update)
        }
    }

    fn service() -> UserUpdateService {
        UserUpdateService::new(Arc::new(PassThroughUpdateHandler))
    }

    fn failing_fields(error: AppError) -> Vec<String> {
        error.details().map(|d| d.into_keys().collect()).unwrap_or_default()
    }

    #[test]
    fn test_validate_scenarios() {
        let service = service();

        let update = service.validate(json!({"userId": "u1"})).unwrap();
        assert_eq!(update.user_id, "u1");
        assert_eq!(update.age, None);

        let error = service.validate(json!({"userId": "", "age": 30})).unwrap_err();
        assert_eq!(failing_fields(error), vec!["userId"]);

        let error = service.validate(json!({"userId": "u1", "age": null})).unwrap_err();
        assert_eq!(failing_fields(error), vec!["age"]);

        let update = service
            .validate(json!({"userId": "u1", "isSubscribed": true}))
            .unwrap();
        assert_eq!(update.is_subscribed, Some(true));
    }

    #[test]
    fn test_type_mismatch_is_reported_per_field() {
        let error = service()
            .validate(json!({"userId": "u1", "age": "thirty", "isSubscribed": 1}))
            .unwrap_err();

        let details = error.details().unwrap();
        assert_eq!(details["age"], vec!["type".to_string()]);
        assert_eq!(details["isSubscribed"], vec!["type".to_string()]);
    }

    #[test]
    fn test_non_object_body() {
        let error = service().validate(json!(["u1"])).unwrap_err();
        assert!(matches!(error, AppError::ValidationError(_)));
    }

    #[actix_web::test]
    async fn test_rejected_input_never_reaches_handler() {
        let handler = Arc::new(CountingHandler::default());
        let service = UserUpdateService::new(handler.clone());

        assert!(service.update_user(json!({"age": 3})).await.is_err());
        assert_eq!(handler.calls.load(Ordering::SeqCst), 0);

        let update = service
            .update_user(json!({"userId": "u1", "age": 0, "isSubscribed": false}))
            .await
            .unwrap();
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(update.age, Some(0));
        assert_eq!(update.is_subscribed, Some(false));
    }
}
