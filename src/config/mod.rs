//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 실행 환경 (development, test, staging, production)
//! export ENVIRONMENT="development"
//!
//! # 서버 설정
//! export HOST="127.0.0.1"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 요청 빈도 제한
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:8080"
//! ```
//!
//! `PROFILE` 값(`dev`, `prod`)에 따라 `main`이 `.env.dev` / `.env.prod`를 먼저 로드합니다.

pub mod data_config;

pub use data_config::*;
