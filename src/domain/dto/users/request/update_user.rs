//! # 사용자 수정 요청 DTO
//!
//! 사용자 레코드를 부분 수정하기 위한 입력 구조를 정의합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자 ID (`userId`)
//! - 필수: 키가 있어야 하며 `null`이나 `""`일 수 없음
//! - 공백만 있는 문자열은 비어 있지 않은 것으로 취급
//!
//! ### 나이 (`age`), 구독 여부 (`isSubscribed`)
//! - 생략 가능
//! - 키를 보낸 경우 `null`일 수 없음
//! - `0`, `false`는 유효한 값
//!
//! ## JSON 예제
//!
//! ```json
//! { "userId": "u1", "age": 30, "isSubscribed": false }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::domain::shape::{FieldRule, FieldType, FieldValue, InputShape, Presence};
use crate::utils::field_utils::deserialize_present;

pub const USER_ID: &str = "userId";
pub const AGE: &str = "age";
pub const IS_SUBSCRIBED: &str = "isSubscribed";

/// `UpdateUserRequest`의 필드 규칙 테이블
pub const UPDATE_USER_SHAPE: InputShape = InputShape {
    name: "UpdateUserInput",
    fields: &[
        FieldRule::required(USER_ID, FieldType::String),
        FieldRule::optional(AGE, FieldType::Int),
        FieldRule::optional(IS_SUBSCRIBED, FieldType::Boolean),
    ],
};

/// 사용자 부분 수정 요청
///
/// 요청마다 역직렬화 계층이 만들고, 검증 직후 수정 처리기로 넘겨지거나 거부됩니다.
/// 선택 필드는 "키 없음"(`None`)과 "`null`"(`Some(None)`)을 구분합니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// 수정할 사용자 ID
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<Option<i64>>,

    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_subscribed: Option<Option<bool>>,
}

/// 검증을 통과한 사용자 수정 입력
///
/// `user_id`는 항상 비어 있지 않습니다. 보내지 않은 선택 필드는 직렬화에서 빠집니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_subscribed: Option<bool>,
}

impl UpdateUserRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            ..Default::default()
        }
    }

    pub fn with_age(mut self, age: Option<i64>) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_subscription(mut self, is_subscribed: Option<bool>) -> Self {
        self.is_subscribed = Some(is_subscribed);
        self
    }

    /// 검증 후 `UserUpdate`로 변환합니다.
    ///
    /// # Errors
    ///
    /// 규칙을 어긴 모든 필드가 담긴 `ValidationErrors`
    pub fn into_update(self) -> Result<UserUpdate, ValidationErrors> {
        self.validate()?;

        Ok(UserUpdate {
            user_id: self.user_id.unwrap_or_default(),
            age: self.age.flatten(),
            is_subscribed: self.is_subscribed.flatten(),
        })
    }

    fn presence(&self, field: &str) -> Presence<'_> {
        match field {
            USER_ID => match self.user_id.as_deref() {
                Some(user_id) => Presence::Value(FieldValue::Str(user_id)),
                None => Presence::Absent,
            },
            AGE => optional_presence(&self.age, |age| FieldValue::Int(*age)),
            IS_SUBSCRIBED => optional_presence(&self.is_subscribed, |flag| FieldValue::Bool(*flag)),
            _ => Presence::Absent,
        }
    }
}

impl Validate for UpdateUserRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        UPDATE_USER_SHAPE.validate_presence(|field| self.presence(field))
    }
}

fn optional_presence<'a, T>(
    value: &'a Option<Option<T>>,
    to_value: impl Fn(&'a T) -> FieldValue<'a>,
) -> Presence<'a> {
    match value {
        None => Presence::Absent,
        Some(None) => Presence::Null,
        Some(Some(inner)) => Presence::Value(to_value(inner)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shape::REQUIRED;

    fn failing_fields(errors: &ValidationErrors) -> Vec<String> {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        fields
    }

    fn parse(json: &str) -> UpdateUserRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_user_id_only_is_valid_and_unchanged() {
        let request = parse(r#"{"userId": "u1"}"#);
        let update = request.into_update().unwrap();

        assert_eq!(
            update,
            UserUpdate {
                user_id: "u1".to_string(),
                age: None,
                is_subscribed: None,
            }
        );
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"userId":"u1"}"#);
    }

    #[test]
    fn test_missing_null_or_empty_user_id() {
        for json in [
            r#"{}"#,
            r#"{"userId": null}"#,
            r#"{"userId": ""}"#,
            r#"{"userId": "", "age": 30}"#,
        ] {
            let errors = parse(json).validate().unwrap_err();
            assert_eq!(failing_fields(&errors), vec![USER_ID], "input: {}", json);
            assert_eq!(errors.field_errors()[USER_ID][0].code, REQUIRED);
        }
    }

    #[test]
    fn test_zero_age_is_valid() {
        let update = parse(r#"{"userId": "u1", "age": 0}"#).into_update().unwrap();
        assert_eq!(update.age, Some(0));
    }

    #[test]
    fn test_null_age_is_rejected() {
        let errors = parse(r#"{"userId": "u1", "age": null}"#).validate().unwrap_err();
        assert_eq!(failing_fields(&errors), vec![AGE]);
    }

    #[test]
    fn test_false_subscription_is_valid() {
        let update = parse(r#"{"userId": "u1", "isSubscribed": false}"#)
            .into_update()
            .unwrap();
        assert_eq!(update.is_subscribed, Some(false));
    }

    #[test]
    fn test_true_subscription_is_valid() {
        assert!(parse(r#"{"userId": "u1", "isSubscribed": true}"#).validate().is_ok());
    }

    #[test]
    fn test_null_subscription_is_rejected() {
        let errors = parse(r#"{"userId": "u1", "isSubscribed": null}"#)
            .validate()
            .unwrap_err();
        assert_eq!(failing_fields(&errors), vec![IS_SUBSCRIBED]);
    }

    #[test]
    fn test_errors_are_aggregated() {
        let errors = parse(r#"{"age": null, "isSubscribed": null}"#).validate().unwrap_err();
        assert_eq!(failing_fields(&errors), vec![AGE, IS_SUBSCRIBED, USER_ID]);
    }

    #[test]
    fn test_builder_matches_json() {
        let built = UpdateUserRequest::new("u1").with_age(Some(30)).with_subscription(None);
        assert_eq!(built, parse(r#"{"userId": "u1", "age": 30, "isSubscribed": null}"#));
        assert!(built.validate().is_err());
    }

    #[test]
    fn test_sdl() {
        assert_eq!(
            UPDATE_USER_SHAPE.to_sdl(),
            "input UpdateUserInput {\n  userId: String!\n  age: Int\n  isSubscribed: Boolean\n}"
        );
    }
}
