//! # 사용자 관련 응답 DTO 모듈
//!
//! 처리 결과를 클라이언트에게 일관된 형태로 전달하는 DTO들입니다.
//! 모든 응답 필드는 camelCase로 직렬화됩니다.

pub mod update_user_response;

pub use update_user_response::UpdateUserResponse;
