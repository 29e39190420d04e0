//! 사용자 수정 입력 서비스
//!
//! 사용자 부분 수정 요청의 입력 형태를 선언하고, 필드 단위 존재 여부 검증을
//! 수행하는 Actix-web 기반 서비스입니다.
//!
//! # Features
//!
//! - **입력 형태 선언**: 필드 이름 → `{타입, 필수, null 허용}` 테이블
//! - **존재 여부 검증**: 누락/`null`/빈 문자열 거부, `0`과 `false`는 허용
//! - **에러 집계**: 실패한 모든 필드를 한 응답에 보고
//! - **스키마 설명**: 같은 테이블에서 GraphQL SDL 입력 정의 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 처리기 전달
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Domain      │ ← 입력 형태, DTO
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use validator::Validate;
//! use update_user_input::domain::dto::users::request::UpdateUserRequest;
//!
//! let request: UpdateUserRequest = serde_json::from_str(r#"{"userId": "u1", "age": null}"#)?;
//! assert!(request.validate().is_err());
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
