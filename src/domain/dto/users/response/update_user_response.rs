//! 사용자 수정 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::users::request::UserUpdate;

/// 수정 처리기에 전달된 입력과 접수 시각
///
/// ```json
/// {
///   "input": { "userId": "u1", "age": 30 },
///   "acceptedAt": "2024-01-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub input: UserUpdate,
    pub accepted_at: DateTime<Utc>,
}

impl From<UserUpdate> for UpdateUserResponse {
    fn from(input: UserUpdate) -> Self {
        Self {
            input,
            accepted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_omits_absent_fields() {
        let response = UpdateUserResponse::from(UserUpdate {
            user_id: "u1".to_string(),
            age: None,
            is_subscribed: Some(true),
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["input"], serde_json::json!({"userId": "u1", "isSubscribed": true}));
        assert!(json["acceptedAt"].is_string());
    }
}
