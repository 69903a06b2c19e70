//! Comment Entity

use serde::{Deserialize, Serialize};

/// 댓글 레코드
///
/// ID는 모든 게시글이 공유하는 하나의 카운터에서 발급됩니다.
/// 별도의 정렬 필드 없이 삽입 순서가 곧 표시 순서입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: i64,
    pub content: String,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: i64,
}
