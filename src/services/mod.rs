//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 프로세스별로 사용하는 서비스가 다릅니다.
//!
//! | 프로세스 | 서비스 |
//! |----------|--------|
//! | `user-service` | [`users::UserService`], [`auth::TokenService`] |
//! | `blog-service` | [`blog::BlogService`] |
//! | `gateway` | [`gateway::GatewayService`] |
//!
//! 서비스는 전역 싱글톤이 아니라 바이너리 시작 시 생성되어
//! `web::Data`로 공유됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use blog_gateway::repositories::UserRepository;
//! use blog_gateway::services::{auth::TokenService, users::UserService};
//!
//! let service = UserService::new(
//!     Arc::new(UserRepository::new()),
//!     TokenService::from_env(),
//!     PasswordConfig::bcrypt_cost(),
//! );
//! let app_data = web::Data::new(service);
//! ```

pub mod users;
pub mod auth;
pub mod blog;
pub mod gateway;
