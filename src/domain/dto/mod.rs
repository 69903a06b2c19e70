//! # Data Transfer Objects
//!
//! 컴포넌트 경계를 넘는 요청/응답 본문들입니다.
//!
//! - [`users`] - 사용자 서비스 RPC 본문
//! - [`blog`] - 블로그 서비스 RPC 본문
//! - [`gateway`] - 게이트웨이 공개 API 본문 (신원 정보 없음)

pub mod users;
pub mod blog;
pub mod gateway;
