//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 서비스 RPC 응답 본문입니다. 어떤 응답에도 비밀번호나
//! 비밀번호 해시는 포함되지 않습니다.

pub mod user_response;

pub use user_response::{RegisterResponse, LoginResponse, VerifyResponse};
