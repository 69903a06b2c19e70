//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 서비스 RPC(Register, Login, Verify)의 요청 본문입니다.
//! 게이트웨이의 `POST /register`, `POST /login`도 같은 본문을 받아
//! 그대로 사용자 서비스에 전달합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 필수값, 이메일 형식 (`validator`)
//! 3. **비즈니스 검증**: 사용자명 중복 등은 서비스 계층에서 수행

pub mod create_user_request;
pub mod auth_request;

pub use create_user_request::RegisterRequest;
pub use auth_request::{LoginRequest, VerifyRequest};
