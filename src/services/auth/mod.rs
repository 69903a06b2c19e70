//! 인증 서비스 모듈
//!
//! 사용자 서비스가 로그인 시 발급하고 Verify에서 검증하는
//! HS256 JWT 토큰을 다룹니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간(`exp`) 검증, 허용 오차 없음
//! - 서명 위조/만료/형식 오류는 모두 "검증 실패"로 동일하게 취급

pub mod token_service;

pub use token_service::*;
