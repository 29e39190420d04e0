//! # Input Shape Module
//!
//! 요청 입력의 필드 규칙을 데코레이터 대신 명시적인 테이블로 선언하고,
//! 하나의 범용 함수로 해석하는 모듈입니다.
//!
//! ## 규칙
//!
//! | 선언 | 키 없음 | `null` | `""` | `0` / `false` |
//! |------|---------|--------|------|---------------|
//! | `FieldRule::required` | `required` | `required` | `required` | 통과 |
//! | `FieldRule::optional` | 통과 | `required` | 통과 | 통과 |
//!
//! 타입이 맞지 않는 값은 `type` 코드로 보고됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::shape::{FieldRule, FieldType, InputShape};
//!
//! const SHAPE: InputShape = InputShape {
//!     name: "UpdateUserInput",
//!     fields: &[
//!         FieldRule::required("userId", FieldType::String),
//!         FieldRule::optional("age", FieldType::Int),
//!     ],
//! };
//!
//! SHAPE.validate_object(&body)?;
//! println!("{}", SHAPE.to_sdl());
//! ```

pub mod input_shape;

pub use input_shape::*;
