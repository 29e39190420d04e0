//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러는 요청 본문을 그대로 서비스에 넘기고, 서비스가 검증과 처리기 호출을 맡습니다.
//! 서비스 인스턴스는 `actix_web::web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::web;
//! use crate::services::users::{PassThroughUpdateHandler, UserUpdateService};
//!
//! let service = web::Data::new(UserUpdateService::new(Arc::new(PassThroughUpdateHandler)));
//! App::new().app_data(service.clone());
//! ```

pub mod users;
