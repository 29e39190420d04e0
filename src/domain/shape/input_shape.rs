//! 입력 형태(Input Shape) 선언과 범용 검증 엔진
//!
//! 필드 이름 → `{타입, 필수 여부, null 수용 여부}` 테이블을 하나의 검증 함수가 해석합니다.
//! 원시 JSON 객체와 타입이 있는 DTO 모두 같은 엔진을 통과합니다.

use serde_json::{Map, Value, json};
use validator::{ValidationError, ValidationErrors};

/// 필수 값이 없거나 비어 있을 때의 에러 코드
pub const REQUIRED: &str = "required";

/// 값의 타입이 선언과 다를 때의 에러 코드
pub const TYPE_MISMATCH: &str = "type";

/// 필드 타입
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Int,
    Boolean,
}

impl FieldType {
    /// GraphQL 스칼라 이름
    pub fn graphql_name(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Int => "Int",
            FieldType::Boolean => "Boolean",
        }
    }

    fn matches(&self, value: &FieldValue<'_>) -> bool {
        matches!(
            (self, value),
            (FieldType::String, FieldValue::Str(_))
                | (FieldType::Int, FieldValue::Int(_))
                | (FieldType::Boolean, FieldValue::Bool(_))
        )
    }
}

/// 한 필드에 선언된 규칙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// 외부(와이어) 필드 이름
    pub name: &'static str,
    pub field_type: FieldType,
    /// 키가 반드시 있어야 하는지 여부
    pub required: bool,
    /// 선택 필드에 `null`이 와도 검증을 통과시키는지 여부
    ///
    /// 검증기의 null 규칙일 뿐 GraphQL 타입의 nullability와는 별개입니다.
    /// SDL의 `!`는 `required`만 따릅니다.
    pub accepts_null: bool,
}

impl FieldRule {
    /// 필수 필드: 키가 있어야 하고 `null`이나 `""`일 수 없음
    pub const fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: true,
            accepts_null: false,
        }
    }

    /// 선택 필드: 키는 생략 가능하지만 보낸 경우 `null`일 수 없음
    pub const fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            required: false,
            accepts_null: false,
        }
    }
}

/// 검증 엔진이 보는 필드 값
///
/// `0`과 `false`는 값이 있는 것으로 취급합니다. 비어 있음 판정은 `Null`과
/// 필수 문자열의 `""`에만 적용됩니다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
    /// 선언된 어떤 타입에도 맞지 않는 값 (실수, 배열, 객체 등)
    Other(&'static str),
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Str(s),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Other("number"),
            },
            Value::Array(_) => FieldValue::Other("array"),
            Value::Object(_) => FieldValue::Other("object"),
            // Null은 Presence::Null로 먼저 걸러짐
            Value::Null => FieldValue::Other("null"),
        }
    }
}

/// 입력에서 한 필드가 어떤 상태로 존재하는지
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence<'a> {
    /// 키 자체가 없음
    Absent,
    /// 키는 있으나 값이 `null`
    Null,
    Value(FieldValue<'a>),
}

impl<'a> Presence<'a> {
    /// JSON 객체에서 필드 상태를 읽습니다.
    pub fn from_json(object: &'a Map<String, Value>, name: &str) -> Self {
        match object.get(name) {
            None => Presence::Absent,
            Some(Value::Null) => Presence::Null,
            Some(value) => Presence::Value(FieldValue::from(value)),
        }
    }
}

/// 요청 입력의 구조 선언
#[derive(Debug, Clone, Copy)]
pub struct InputShape {
    /// GraphQL 입력 타입 이름
    pub name: &'static str,
    pub fields: &'static [FieldRule],
}

impl InputShape {
    /// 모든 필드에 규칙을 적용하고 실패한 필드를 한 번에 모아 반환합니다.
    ///
    /// `lookup`은 필드 이름을 받아 입력에서의 상태를 알려줍니다.
    /// 선언되지 않은 키는 보지 않습니다.
    pub fn validate_presence<'a, F>(&self, lookup: F) -> Result<(), ValidationErrors>
    where
        F: Fn(&'static str) -> Presence<'a>,
    {
        let mut errors = ValidationErrors::new();

        for rule in self.fields {
            if let Some(error) = check_field(rule, lookup(rule.name)) {
                errors.add(rule.name, error);
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// 원시 JSON 객체를 검증합니다.
    pub fn validate_object(&self, object: &Map<String, Value>) -> Result<(), ValidationErrors> {
        self.validate_presence(|name| Presence::from_json(object, name))
    }

    /// GraphQL SDL 입력 타입 정의를 생성합니다.
    ///
    /// ```text
    /// input UpdateUserInput {
    ///   userId: String!
    ///   age: Int
    ///   isSubscribed: Boolean
    /// }
    /// ```
    pub fn to_sdl(&self) -> String {
        let mut sdl = format!("input {} {{\n", self.name);
        for rule in self.fields {
            let bang = if rule.required { "!" } else { "" };
            sdl.push_str(&format!("  {}: {}{}\n", rule.name, rule.field_type.graphql_name(), bang));
        }
        sdl.push('}');
        sdl
    }

    /// 필드 테이블의 JSON 표현
    pub fn describe(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(|rule| {
                json!({
                    "name": rule.name,
                    "type": rule.field_type.graphql_name(),
                    "required": rule.required,
                    "acceptsNull": rule.accepts_null,
                })
            })
            .collect();

        json!({
            "name": self.name,
            "fields": fields,
            "sdl": self.to_sdl(),
        })
    }
}

fn check_field(rule: &FieldRule, presence: Presence<'_>) -> Option<ValidationError> {
    match presence {
        Presence::Absent if rule.required => Some(required_error(rule.name)),
        Presence::Absent => None,
        Presence::Null if rule.accepts_null && !rule.required => None,
        Presence::Null => Some(required_error(rule.name)),
        Presence::Value(value) if !rule.field_type.matches(&value) => {
            Some(type_error(rule, &value))
        }
        // IsNotEmpty 규칙: 공백 문자열은 비어 있지 않은 것으로 봄
        Presence::Value(FieldValue::Str("")) if rule.required => Some(required_error(rule.name)),
        Presence::Value(_) => None,
    }
}

fn required_error(field: &'static str) -> ValidationError {
    let mut error = ValidationError::new(REQUIRED)
        .with_message(format!("{} 값은 비어 있을 수 없습니다", field).into());
    error.add_param("field".into(), &field);
    error
}

fn type_error(rule: &FieldRule, value: &FieldValue<'_>) -> ValidationError {
    let found = match value {
        FieldValue::Str(_) => "String",
        FieldValue::Int(_) => "Int",
        FieldValue::Bool(_) => "Boolean",
        FieldValue::Other(kind) => *kind,
    };

    let mut error = ValidationError::new(TYPE_MISMATCH).with_message(
        format!("{} 값은 {} 타입이어야 합니다", rule.name, rule.field_type.graphql_name()).into(),
    );
    error.add_param("expected".into(), &rule.field_type.graphql_name());
    error.add_param("found".into(), &found);
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHAPE: InputShape = InputShape {
        name: "TestInput",
        fields: &[
            FieldRule::required("id", FieldType::String),
            FieldRule::optional("count", FieldType::Int),
            FieldRule {
                name: "note",
                field_type: FieldType::String,
                required: false,
                accepts_null: true,
            },
        ],
    };

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn codes(errors: &ValidationErrors, field: &str) -> Vec<String> {
        errors
            .field_errors()
            .iter()
            .find(|(name, _)| name.to_string() == field)
            .map(|(_, errs)| errs.iter().map(|e| e.code.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_required_field_absent_null_or_empty() {
        for input in [json!({}), json!({"id": null}), json!({"id": ""})] {
            let errors = SHAPE.validate_object(&object(input)).unwrap_err();
            assert_eq!(codes(&errors, "id"), vec![REQUIRED]);
        }
    }

    #[test]
    fn test_whitespace_string_is_not_empty() {
        assert!(SHAPE.validate_object(&object(json!({"id": " "}))).is_ok());
    }

    #[test]
    fn test_optional_field_rejects_only_null() {
        assert!(SHAPE.validate_object(&object(json!({"id": "a"}))).is_ok());
        assert!(SHAPE.validate_object(&object(json!({"id": "a", "count": 0}))).is_ok());

        let errors = SHAPE
            .validate_object(&object(json!({"id": "a", "count": null})))
            .unwrap_err();
        assert_eq!(codes(&errors, "count"), vec![REQUIRED]);
        assert!(codes(&errors, "id").is_empty());
    }

    #[test]
    fn test_null_accepting_field() {
        assert!(SHAPE.validate_object(&object(json!({"id": "a", "note": null}))).is_ok());
    }

    #[test]
    fn test_type_mismatch() {
        let errors = SHAPE
            .validate_object(&object(json!({"id": 7, "count": 1.5})))
            .unwrap_err();
        assert_eq!(codes(&errors, "id"), vec![TYPE_MISMATCH]);
        assert_eq!(codes(&errors, "count"), vec![TYPE_MISMATCH]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert!(SHAPE.validate_object(&object(json!({"id": "a", "extra": [1]}))).is_ok());
    }

    #[test]
    fn test_to_sdl() {
        assert_eq!(
            SHAPE.to_sdl(),
            "input TestInput {\n  id: String!\n  count: Int\n  note: String\n}"
        );
    }

    #[test]
    fn test_describe_lists_fields() {
        let description = SHAPE.describe();
        assert_eq!(description["name"], "TestInput");
        assert_eq!(description["fields"].as_array().map(Vec::len), Some(3));
        assert_eq!(description["fields"][0]["required"], true);
        assert_eq!(description["fields"][1]["required"], false);
        assert_eq!(description["fields"][1]["acceptsNull"], false);
        assert_eq!(description["fields"][2]["acceptsNull"], true);
        assert!(description["fields"][0].get("nullable").is_none());
    }
}
