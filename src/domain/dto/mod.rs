//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 역할 | 이 모듈 |
//! |------|---------|
//! | HTTP 요청 본문 매핑 | `users::request` |
//! | HTTP 응답 본문 매핑 | `users::response` |
//! | 입력값 유효성 검증 | `validator::Validate` + `domain::shape` |
//! | JSON 필드 매핑 | `serde` (camelCase) |

pub mod users;
