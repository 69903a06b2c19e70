//! 서버 및 환경 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, 비밀번호 해싱 관련 설정을 관리합니다.
//! 세 프로세스(사용자 서비스, 블로그 서비스, 게이트웨이)가 같은 설정
//! 구조체를 공유하고, 포트만 [`ServiceRole`]에 따라 달라집니다.

use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

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

/// 프로세스 역할
///
/// 각 바이너리는 하나의 역할로 기동되며, 역할에 따라 기본 포트와
/// 로그에 표시되는 서비스 이름이 결정됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceRole {
    UserService,
    BlogService,
    Gateway,
}

impl ServiceRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceRole::UserService => "user-service",
            ServiceRole::BlogService => "blog-service",
            ServiceRole::Gateway => "gateway",
        }
    }

    fn port_env_key(&self) -> &'static str {
        match self {
            ServiceRole::UserService => "USER_SERVICE_PORT",
            ServiceRole::BlogService => "BLOG_SERVICE_PORT",
            ServiceRole::Gateway => "GATEWAY_PORT",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceRole::UserService => 8081,
            ServiceRole::BlogService => 8082,
            ServiceRole::Gateway => 8080,
        }
    }
}

pub struct PasswordConfig;

impl PasswordConfig {
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 유효하지 않습니다 (4-15). 환경 기본값을 사용합니다");
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port(role: ServiceRole) -> u16 {
        env::var(role.port_env_key())
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| role.default_port())
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address(role: ServiceRole) -> String {
        format!("{}:{}", Self::host(), Self::port(role))
    }

    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|value| value.parse().ok())
            .filter(|workers: &usize| *workers > 0)
            .unwrap_or(4)
    }
}
