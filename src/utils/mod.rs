//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`field_utils`] - 부분 업데이트 필드 역직렬화 헬퍼

pub mod field_utils;
