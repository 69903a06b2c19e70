//! # 블로그 서비스 구현
//!
//! 요청 DTO 검증, 저장소 호출, 응답 DTO 변환을 담당합니다.
//! 소유권 검사와 연쇄 삭제는 저장소가 단일 락 안에서 수행합니다.

use std::sync::Arc;
use validator::Validate;
use crate::domain::dto::blog::{
    request::{
        CreateCommentRequest, CreatePostRequest, DeletePostRequest, GetPostRequest,
        ListCommentsRequest, ListPostsRequest, UpdatePostRequest,
    },
    response::{CommentResponse, DeletePostResponse, ListCommentsResponse, ListPostsResponse, PostResponse},
};
use crate::errors::AppError;
use crate::repositories::BlogRepository;

pub struct BlogService {
    blog_repo: Arc<BlogRepository>,
}

impl BlogService {
    pub fn new(blog_repo: Arc<BlogRepository>) -> Self {
        Self { blog_repo }
    }

    pub fn create_post(&self, request: CreatePostRequest) -> Result<PostResponse, AppError> {
        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // 수정 요청과 같은 규칙으로 앞뒤 공백을 제거해 저장
        let post = self.blog_repo.create_post(
            request.title.trim().to_string(),
            request.content.trim().to_string(),
            request.user_id,
        )?;
        log::info!("게시글 작성 - ID: {}, 작성자: {}", post.id, post.user_id);

        Ok(PostResponse { post })
    }

    pub fn get_post(&self, request: GetPostRequest) -> Result<PostResponse, AppError> {
        let post = self.blog_repo.get_post(request.id)?;
        Ok(PostResponse { post })
    }

    pub fn list_posts(&self, request: ListPostsRequest) -> Result<ListPostsResponse, AppError> {
        let (posts, pagination) = self.blog_repo.list_posts(request.page, request.size)?;
        Ok(ListPostsResponse { posts, pagination })
    }

    pub fn update_post(&self, request: UpdatePostRequest) -> Result<PostResponse, AppError> {
        let post = self.blog_repo
            .update_post(request.id, request.user_id, request.title, request.content)
            .inspect_err(|e| {
                if matches!(e, AppError::AuthorizationError(_)) {
                    log::warn!("게시글 수정 거부 - ID: {}, 요청자: {}", request.id, request.user_id);
                }
            })?;
        log::info!("게시글 수정 - ID: {}", post.id);

        Ok(PostResponse { post })
    }

    /// 게시글과 그 댓글을 함께 삭제합니다.
    pub fn delete_post(&self, request: DeletePostRequest) -> Result<DeletePostResponse, AppError> {
        self.blog_repo
            .delete_post(request.id, request.user_id)
            .inspect_err(|e| {
                if matches!(e, AppError::AuthorizationError(_)) {
                    log::warn!("게시글 삭제 거부 - ID: {}, 요청자: {}", request.id, request.user_id);
                }
            })?;
        log::info!("게시글 삭제 - ID: {}", request.id);

        Ok(DeletePostResponse { ok: true })
    }

    pub fn create_comment(&self, request: CreateCommentRequest) -> Result<CommentResponse, AppError> {
        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let comment = self.blog_repo.create_comment(
            request.post_id,
            request.content.trim().to_string(),
            request.user_id,
        )?;
        log::info!("댓글 작성 - ID: {}, 게시글: {}", comment.id, comment.post_id);

        Ok(CommentResponse { comment })
    }

    pub fn list_comments(&self, request: ListCommentsRequest) -> Result<ListCommentsResponse, AppError> {
        let comments = self.blog_repo.list_comments(request.post_id)?;
        Ok(ListCommentsResponse { comments })
    }
}
