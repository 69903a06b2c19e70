//! # Domain Entities
//!
//! 각 도메인 서비스가 메모리에 보관하는 레코드 타입들입니다.
//!
//! - [`users`] - 사용자 서비스가 소유하는 `UserRecord`
//! - [`blog`] - 블로그 서비스가 소유하는 `PostRecord`, `CommentRecord`
//!
//! 레코드는 소유 서비스 밖으로 나갈 때 DTO로 변환되거나(사용자),
//! 그대로 직렬화되어 전송됩니다(게시글, 댓글).

pub mod users;
pub mod blog;

pub use users::*;
pub use blog::*;
