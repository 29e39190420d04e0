//! 사용자 수정 서비스 모듈
//!
//! 사용자 수정 입력의 검증과 처리기 전달을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::{PassThroughUpdateHandler, UserUpdateService};
//!
//! let service = UserUpdateService::new(Arc::new(PassThroughUpdateHandler));
//! let update = service.update_user(serde_json::json!({"userId": "u1"})).await?;
//! ```

pub mod update_handler;
pub mod user_update_service;

pub use update_handler::{PassThroughUpdateHandler, UserUpdateHandler};
pub use user_update_service::UserUpdateService;
