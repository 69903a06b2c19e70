//! Blog Entity Module
//!
//! 블로그 서비스가 소유하는 게시글/댓글 레코드를 정의합니다.

pub mod post;
pub mod comment;

pub use post::*;
pub use comment::*;
