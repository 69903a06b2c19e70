//! 사용자 관리 서비스 모듈
//!
//! 사용자 서비스 프로세스의 비즈니스 로직(Register, Login, Verify)을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - 사용자명 중복 방지
//! - 비밀번호는 해시 검증으로만 비교

pub mod user_service;

pub use user_service::UserService;
