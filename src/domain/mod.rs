//! # Domain Layer Module
//!
//! 요청 입력의 데이터 계약과 검증 규칙을 담당하는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── shape   - 필드 규칙 테이블과 범용 검증 엔진
//! └── dto     - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`shape`] - 입력 형태 선언
//!
//! 필드 이름 → `{타입, 필수, null 허용}` 테이블을 선언하고 하나의 함수로 해석합니다.
//! 같은 테이블에서 GraphQL SDL 입력 정의도 만들어집니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 주고받는 구조체들입니다. 요청 DTO는 `validator::Validate`를 구현하며,
//! 그 구현은 [`shape`]의 테이블에 위임합니다.
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::UpdateUserRequest;
//!
//! let request: UpdateUserRequest = serde_json::from_str(r#"{"userId": "u1"}"#)?;
//! request.validate()?;
//! ```

pub mod dto;
pub mod shape;
