//! 블로그 서비스 HTTP 클라이언트

use async_trait::async_trait;
use crate::clients::{BlogRpc, RpcClient, RpcContext};
use crate::domain::dto::blog::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, DeletePostRequest, DeletePostResponse,
    GetPostRequest, ListCommentsRequest, ListCommentsResponse, ListPostsRequest, ListPostsResponse,
    PostResponse, UpdatePostRequest,
};
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct BlogServiceClient {
    rpc: RpcClient,
}

impl BlogServiceClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            rpc: RpcClient::new(http, base_url, "blog-service"),
        }
    }
}

#[async_trait(?Send)]
impl BlogRpc for BlogServiceClient {
    async fn create_post(&self, ctx: &RpcContext, request: CreatePostRequest) -> Result<PostResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/create_post", &request).await
    }

    async fn get_post(&self, ctx: &RpcContext, request: GetPostRequest) -> Result<PostResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/get_post", &request).await
    }

    async fn list_posts(&self, ctx: &RpcContext, request: ListPostsRequest) -> Result<ListPostsResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/list_posts", &request).await
    }

    async fn update_post(&self, ctx: &RpcContext, request: UpdatePostRequest) -> Result<PostResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/update_post", &request).await
    }

    async fn delete_post(&self, ctx: &RpcContext, request: DeletePostRequest) -> Result<DeletePostResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/delete_post", &request).await
    }

    async fn create_comment(&self, ctx: &RpcContext, request: CreateCommentRequest) -> Result<CommentResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/create_comment", &request).await
    }

    async fn list_comments(&self, ctx: &RpcContext, request: ListCommentsRequest) -> Result<ListCommentsResponse, AppError> {
        self.rpc.call(ctx, "/rpc/blog/list_comments", &request).await
    }
}
