//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티

pub mod string_utils;
