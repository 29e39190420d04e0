//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트가 보낸 JSON을 구조화된 Rust 타입으로 바꾸고 검증하는 DTO들입니다.
//!
//! ## 검증 계층
//!
//! 1. **구조 검증**: 필드 규칙 테이블(`UPDATE_USER_SHAPE`)로 원시 JSON의 존재 여부와 타입 확인
//! 2. **타입 변환**: `serde`로 `UpdateUserRequest` 역직렬화
//! 3. **DTO 검증**: `validator::Validate` 구현이 같은 규칙 테이블을 다시 적용
//!
//! 검증 실패 시 `validator::ValidationErrors`가 반환되며,
//! 상위 에러 핸들러에서 HTTP 400 Bad Request 응답으로 변환됩니다.

pub mod update_user;

pub use update_user::{UPDATE_USER_SHAPE, UpdateUserRequest, UserUpdate};
