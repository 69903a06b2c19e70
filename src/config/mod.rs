//! # Configuration Module
//!
//! 세 프로세스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 정적 접근자 구조체로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버 바인딩, bcrypt cost
//! - [`auth_config`] - JWT 서명 설정, 하위 서비스 주소와 RPC 기한
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 공통
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export HOST="127.0.0.1"
//! export WORKERS="4"
//!
//! # 포트
//! export GATEWAY_PORT="8080"
//! export USER_SERVICE_PORT="8081"
//! export BLOG_SERVICE_PORT="8082"
//!
//! # 사용자 서비스
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 게이트웨이
//! export USER_SERVICE_URL="http://127.0.0.1:8081"
//! export BLOG_SERVICE_URL="http://127.0.0.1:8082"
//! export RPC_TIMEOUT_MS="3000"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
