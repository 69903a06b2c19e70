//! Post Entity

use serde::{Deserialize, Serialize};

/// 게시글 레코드
///
/// 블로그 서비스가 유일한 소유자이며, RPC 응답과 게이트웨이 응답에
/// 동일한 형태로 직렬화됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// 작성자 ID, 수정/삭제 시 소유권 검사에 사용
    pub user_id: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PostRecord {
    pub fn new(id: i64, title: String, content: String, user_id: i64, now: i64) -> Self {
        Self {
            id,
            title,
            content,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }

    /// 전달된 필드만 반영하고 `updated_at`을 엄격하게 증가시킵니다.
    ///
    /// 같은 초 안에 연속 수정되어도 `updated_at`은 이전 값보다 커야 합니다.
    pub fn apply_update(&mut self, title: Option<String>, content: Option<String>, now: i64) {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.updated_at = now.max(self.updated_at + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_update_only_touches_supplied_fields() {
        let mut post = PostRecord::new(1, "Hi".to_string(), "World".to_string(), 1, 100);

        post.apply_update(Some("Hi2".to_string()), None, 100);

        assert_eq!(post.title, "Hi2");
        assert_eq!(post.content, "World");
        assert_eq!(post.created_at, 100);
    }

    #[test]
    fn test_updated_at_strictly_increases_within_same_second() {
        let mut post = PostRecord::new(1, "Hi".to_string(), "World".to_string(), 1, 100);

        post.apply_update(None, None, 100);
        assert_eq!(post.updated_at, 101);

        post.apply_update(None, None, 500);
        assert_eq!(post.updated_at, 500);
    }

    #[test]
    fn test_ownership() {
        let post = PostRecord::new(1, "Hi".to_string(), "World".to_string(), 7, 100);
        assert!(post.is_owned_by(7));
        assert!(!post.is_owned_by(8));
    }
}
