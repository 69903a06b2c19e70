//! Users Entity Module
//!
//! 사용자 서비스가 소유하는 사용자 레코드를 정의합니다.
//! 레코드는 등록 시 생성되며 이후 수정되거나 삭제되지 않습니다.

pub mod user;

pub use user::*;
