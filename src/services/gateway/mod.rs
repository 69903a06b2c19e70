//! 게이트웨이 조합 서비스 모듈

pub mod gateway_service;

pub use gateway_service::*;
