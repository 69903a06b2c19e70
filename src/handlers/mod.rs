//! # HTTP Request Handlers Module
//!
//! 세 프로세스의 HTTP 엔드포인트 핸들러입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ 공개 HTTP
//! ┌─────────────────────▼───────────────────────┐
//!   gateway 핸들러 → GatewayService              ← gateway
//! └──────────┬──────────────────────┬───────────┘
//!            │ POST /rpc/user/*     │ POST /rpc/blog/*
//! ┌──────────▼──────────┐ ┌─────────▼───────────┐
//!   users 핸들러            blog 핸들러             ← 도메인 서비스
//!   → UserService          → BlogService
//! └─────────────────────┘ └─────────────────────┘
//! ```
//!
//! ## 공통 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//!   `ResponseError` 구현을 통해 `{"code", "error"}` 본문으로 변환됩니다.
//! - 서비스 객체는 `web::Data<T>`로 주입됩니다.
//! - RPC 핸들러는 모두 `POST`이며 요청/응답 본문은 JSON입니다.

pub mod users;
pub mod blog;
pub mod gateway;
