//! # 블로그 리포지토리 구현
//!
//! 게시글과 댓글을 하나의 `RwLock` 아래에 보관합니다.
//! 게시글 삭제와 댓글 연쇄 삭제, 댓글 작성 시 게시글 존재 확인이
//! 모두 같은 락 안에서 원자적으로 수행됩니다.
//!
//! 게시글은 ID 순으로 정렬된 `BTreeMap`에 보관되어, 목록 조회는
//! 항상 ID 내림차순(최신순)으로 결정적인 결과를 돌려줍니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use chrono::Utc;
use crate::domain::dto::blog::response::Pagination;
use crate::domain::entities::{CommentRecord, PostRecord};
use crate::errors::AppError;

#[derive(Debug, Default)]
struct BlogTable {
    last_post_id: i64,
    /// 게시글과 댓글이 공유하지 않는 별도 카운터
    last_comment_id: i64,
    posts: BTreeMap<i64, PostRecord>,
    comments: HashMap<i64, Vec<CommentRecord>>,
}

#[derive(Debug, Default)]
pub struct BlogRepository {
    table: RwLock<BlogTable>,
}

fn post_not_found(id: i64) -> AppError {
    AppError::NotFound(format!("게시글을 찾을 수 없습니다: {}", id))
}

impl BlogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BlogTable>, AppError> {
        self.table
            .read()
            .map_err(|_| AppError::InternalError("블로그 저장소 락이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BlogTable>, AppError> {
        self.table
            .write()
            .map_err(|_| AppError::InternalError("블로그 저장소 락이 손상되었습니다".to_string()))
    }

    pub fn create_post(&self, title: String, content: String, user_id: i64) -> Result<PostRecord, AppError> {
        let mut table = self.write()?;

        table.last_post_id += 1;
        let post = PostRecord::new(table.last_post_id, title, content, user_id, Utc::now().timestamp());
        table.posts.insert(post.id, post.clone());

        Ok(post)
    }

    pub fn get_post(&self, id: i64) -> Result<PostRecord, AppError> {
        self.read()?
            .posts
            .get(&id)
            .cloned()
            .ok_or_else(|| post_not_found(id))
    }

    /// ID 내림차순으로 한 페이지를 반환합니다.
    ///
    /// 범위를 벗어난 페이지는 빈 목록을 반환하며, `total`은 항상 전체 게시글 수입니다.
    pub fn list_posts(&self, page: u32, size: u32) -> Result<(Vec<PostRecord>, Pagination), AppError> {
        let (page, size) = Pagination::normalize(page, size);
        let table = self.read()?;

        let pagination = Pagination {
            page,
            size,
            total: table.posts.len() as u64,
        };

        let posts = table
            .posts
            .values()
            .rev()
            .skip(pagination.offset())
            .take(size as usize)
            .cloned()
            .collect();

        Ok((posts, pagination))
    }

    /// 작성자 본인만 수정할 수 있습니다.
    ///
    /// 존재 확인 → 소유권 확인 → 반영 순서이므로, 없는 게시글은 누가 요청하든 `NotFound`입니다.
    pub fn update_post(
        &self,
        id: i64,
        user_id: i64,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<PostRecord, AppError> {
        let mut table = self.write()?;
        let post = table.posts.get_mut(&id).ok_or_else(|| post_not_found(id))?;

        if !post.is_owned_by(user_id) {
            return Err(AppError::AuthorizationError("본인이 작성한 게시글만 수정할 수 있습니다".to_string()));
        }

        post.apply_update(title, content, Utc::now().timestamp());
        Ok(post.clone())
    }

    /// 게시글과 그 댓글을 함께 삭제합니다.
    pub fn delete_post(&self, id: i64, user_id: i64) -> Result<(), AppError> {
        let mut table = self.write()?;
        let post = table.posts.get(&id).ok_or_else(|| post_not_found(id))?;

        if !post.is_owned_by(user_id) {
            return Err(AppError::AuthorizationError("본인이 작성한 게시글만 삭제할 수 있습니다".to_string()));
        }

        table.posts.remove(&id);
        table.comments.remove(&id);
        Ok(())
    }

    /// 게시글이 없으면 `NotFound`를 반환하고 댓글 ID 카운터는 소비하지 않습니다.
    pub fn create_comment(&self, post_id: i64, content: String, user_id: i64) -> Result<CommentRecord, AppError> {
        let mut table = self.write()?;

        if !table.posts.contains_key(&post_id) {
            return Err(post_not_found(post_id));
        }

        table.last_comment_id += 1;
        let comment = CommentRecord {
            id: table.last_comment_id,
            content,
            user_id,
            post_id,
            created_at: Utc::now().timestamp(),
        };

        table.comments.entry(post_id).or_default().push(comment.clone());
        Ok(comment)
    }

    /// 작성 순서대로 댓글을 반환합니다. 게시글이 없어도 빈 목록입니다.
    pub fn list_comments(&self, post_id: i64) -> Result<Vec<CommentRecord>, AppError> {
        Ok(self.read()?.comments.get(&post_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> BlogRepository {
        let repo = BlogRepository::new();
        for i in 0..count {
            repo.create_post(format!("title {}", i), "body".to_string(), 1).unwrap();
        }
        repo
    }

    #[test]
    fn test_create_and_get_post() {
        let repo = BlogRepository::new();
        let post = repo.create_post("Hi".into(), "World".into(), 1).unwrap();

        assert_eq!(post.id, 1);
        assert_eq!(post.created_at, post.updated_at);
        assert_eq!(repo.get_post(1).unwrap(), post);
        assert!(matches!(repo.get_post(2), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_list_posts_newest_first_with_total() {
        let repo = seeded(25);

        let (first, pagination) = repo.list_posts(1, 10).unwrap();
        assert_eq!(first.len(), 10);
        assert_eq!(first[0].id, 25);
        assert_eq!(first[9].id, 16);
        assert_eq!(pagination.total, 25);

        let (last, _) = repo.list_posts(3, 10).unwrap();
        let ids: Vec<i64> = last.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);

        let (beyond, pagination) = repo.list_posts(9, 10).unwrap();
        assert!(beyond.is_empty());
        assert_eq!(pagination.total, 25);
    }

    #[test]
    fn test_list_posts_normalizes_parameters() {
        let repo = seeded(3);

        let (posts, pagination) = repo.list_posts(0, 0).unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.size, 10);
    }

    #[test]
    fn test_update_requires_owner() {
        let repo = BlogRepository::new();
        let post = repo.create_post("Hi".into(), "World".into(), 1).unwrap();

        let denied = repo.update_post(post.id, 2, Some("x".into()), None);
        assert!(matches!(denied, Err(AppError::AuthorizationError(_))));

        let missing = repo.update_post(99, 2, None, None);
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let updated = repo.update_post(post.id, 1, Some("Hi2".into()), None).unwrap();
        assert_eq!(updated.title, "Hi2");
        assert_eq!(updated.content, "World");
        assert!(updated.updated_at > post.updated_at);
    }

    #[test]
    fn test_delete_cascades_comments() {
        let repo = BlogRepository::new();
        let post = repo.create_post("Hi".into(), "World".into(), 1).unwrap();
        repo.create_comment(post.id, "nice".into(), 2).unwrap();

        assert!(matches!(repo.delete_post(post.id, 2), Err(AppError::AuthorizationError(_))));
        repo.delete_post(post.id, 1).unwrap();

        assert!(matches!(repo.get_post(post.id), Err(AppError::NotFound(_))));
        assert!(repo.list_comments(post.id).unwrap().is_empty());
        assert!(matches!(repo.delete_post(post.id, 1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_comment_on_missing_post_keeps_counter() {
        let repo = BlogRepository::new();
        let post = repo.create_post("Hi".into(), "World".into(), 1).unwrap();

        let missing = repo.create_comment(99, "x".into(), 1);
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let first = repo.create_comment(post.id, "a".into(), 1).unwrap();
        let second = repo.create_comment(post.id, "b".into(), 2).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let comments = repo.list_comments(post.id).unwrap();
        assert_eq!(comments, vec![first, second]);
    }

    #[test]
    fn test_concurrent_create_post_ids_are_unique() {
        let repo = BlogRepository::new();

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        repo.create_post("t".into(), "c".into(), 1).unwrap();
                    }
                });
            }
        });

        let (first, pagination) = repo.list_posts(1, 100).unwrap();
        assert_eq!(pagination.total, 200);
        let (second, _) = repo.list_posts(2, 100).unwrap();
        let (rest, _) = repo.list_posts(3, 100).unwrap();
        assert!(rest.is_empty());

        let ids: Vec<i64> = first.iter().chain(second.iter()).map(|p| p.id).collect();
        assert_eq!(ids, (1..=200).rev().collect::<Vec<i64>>());
    }
}
