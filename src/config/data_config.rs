//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩, 요청 빈도 제한, CORS 관련 설정을 환경 변수에서 읽어옵니다.
//! 파싱에 실패한 값은 기본값으로 대체하고 에러 로그를 남깁니다.

use std::env;
use std::str::FromStr;

use log::error;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// 환경 변수 값을 파싱하고, 없거나 잘못된 경우 기본값을 사용합니다.
fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.trim().parse::<T>().unwrap_or_else(|e| {
            error!("{} 파싱 실패: {}. 기본값 사용", name, e);
            default
        }),
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_WORKERS: usize = 4;

    /// `HOST`, `PORT`, `WORKERS` 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok(), env::var("WORKERS").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>, workers: Option<String>) -> Self {
        Self {
            host: host.unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            port: parse_or("PORT", port, Self::DEFAULT_PORT),
            workers: parse_or("WORKERS", workers, Self::DEFAULT_WORKERS).max(1),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Rate Limiting 설정
///
/// ```bash
/// # .env.dev (개발 환경)
/// RATE_LIMIT_PER_SECOND=20
/// RATE_LIMIT_BURST_SIZE=40
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub const DEFAULT_PER_SECOND: u64 = 100;
    pub const DEFAULT_BURST_SIZE: u32 = 200;

    pub fn from_env() -> Self {
        Self::from_values(
            env::var("RATE_LIMIT_PER_SECOND").ok(),
            env::var("RATE_LIMIT_BURST_SIZE").ok(),
        )
    }

    fn from_values(per_second: Option<String>, burst_size: Option<String>) -> Self {
        Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", per_second, Self::DEFAULT_PER_SECOND),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", burst_size, Self::DEFAULT_BURST_SIZE),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (쉼표 구분)에서 읽습니다.
    pub fn from_env() -> Self {
        Self::from_value(env::var("CORS_ALLOWED_ORIGINS").ok())
    }

    fn from_value(raw: Option<String>) -> Self {
        let allowed_origins: Vec<String> = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        if allowed_origins.is_empty() {
            return Self {
                allowed_origins: Self::DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            };
        }

        Self { allowed_origins }
    }
}
