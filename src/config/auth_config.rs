//! # Authentication & Upstream Configuration Module
//!
//! 토큰 서명 설정과 게이트웨이가 호출하는 하위 서비스의 주소/기한 설정을
//! 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정 (사용자 서비스)
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```
//!
//! ### 하위 서비스 설정 (게이트웨이)
//! ```bash
//! export USER_SERVICE_URL="http://127.0.0.1:8081"
//! export BLOG_SERVICE_URL="http://127.0.0.1:8082"
//! export RPC_TIMEOUT_MS="3000"
//! ```

use std::env;
use std::time::Duration;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

pub struct UpstreamConfig;

impl UpstreamConfig {
    pub fn user_service_url() -> String {
        env::var("USER_SERVICE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://127.0.0.1:8081".to_string())
    }

    pub fn blog_service_url() -> String {
        env::var("BLOG_SERVICE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| "http://127.0.0.1:8082".to_string())
    }

    pub fn rpc_timeout_ms() -> u64 {
        env::var("RPC_TIMEOUT_MS")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn rpc_timeout() -> Duration {
        Duration::from_millis(Self::rpc_timeout_ms())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_defaults() {
        if env::var("USER_SERVICE_URL").is_err() {
            assert_eq!(UpstreamConfig::user_service_url(), "http://127.0.0.1:8081");
        }

        if env::var("BLOG_SERVICE_URL").is_err() {
            assert_eq!(UpstreamConfig::blog_service_url(), "http://127.0.0.1:8082");
        }

        if env::var("RPC_TIMEOUT_MS").is_err() {
            assert_eq!(UpstreamConfig::rpc_timeout(), Duration::from_millis(3000));
        }
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }
}
