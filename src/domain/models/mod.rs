//! # Domain Models
//!
//! 저장되지 않고 요청 처리 중에만 존재하는 모델들입니다.

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;
