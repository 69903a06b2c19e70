//! 블로그 서비스 RPC 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::{CommentRecord, PostRecord};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub post: PostRecord,
}

/// 실제로 적용된 페이지 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    /// 전체 게시글 수
    pub total: u64,
}

impl Pagination {
    /// 1부터 시작하는 페이지 번호와 페이지 크기를 정규화합니다.
    ///
    /// `page`가 0이면 1로, `size`가 0이면 기본값으로, 상한을 넘으면 상한으로 맞춥니다.
    pub fn normalize(page: u32, size: u32) -> (u32, u32) {
        let page = page.max(1);
        let size = match size {
            0 => DEFAULT_PAGE_SIZE,
            size => size.min(MAX_PAGE_SIZE),
        };
        (page, size)
    }

    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.size as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsResponse {
    pub posts: Vec<PostRecord>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: CommentRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsResponse {
    pub comments: Vec<CommentRecord>,
}
