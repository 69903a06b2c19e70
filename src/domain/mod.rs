//! # Domain Layer
//!
//! 게이트웨이와 두 도메인 서비스가 공유하는 도메인 타입 모음입니다.
//!
//! ```text
//! ┌──────────────┐   Bearer 토큰    ┌──────────────┐
//! │   Gateway    │ ───────────────▶ │ User Service │  UserRecord
//! │              │ ◀─ VerifyResp ── │              │
//! │              │                  └──────────────┘
//! │              │   user_id 첨부   ┌──────────────┐
//! │              │ ───────────────▶ │ Blog Service │  PostRecord
//! │              │ ◀── Post/Comment │              │  CommentRecord
//! └──────────────┘                  └──────────────┘
//! ```
//!
//! - [`entities`] - 서비스가 메모리에 보관하는 레코드
//! - [`dto`] - RPC 및 공개 API 요청/응답 본문
//! - [`models`] - 토큰 클레임, 인증된 호출자 정보

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::{CommentRecord, PostRecord, UserRecord};
pub use models::{AuthenticatedUser, TokenClaims};
