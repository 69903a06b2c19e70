//! # 하위 서비스 RPC 클라이언트
//!
//! 게이트웨이가 사용자 서비스와 블로그 서비스를 호출하는 경계입니다.
//!
//! ```text
//! GatewayService ──► Arc<dyn UserRpc> ──► UserServiceClient ──► POST /rpc/user/*
//!                └─► Arc<dyn BlogRpc> ──► BlogServiceClient ──► POST /rpc/blog/*
//! ```
//!
//! 트레이트 경계 덕분에 테스트에서는 HTTP 없이 서비스 객체를 직접
//! 연결한 구현으로 교체할 수 있습니다.
//!
//! 모든 호출은 [`RpcContext`]를 받아 요청 ID를 전파하고 남은 기한 안에서만
//! 실행됩니다. 재시도는 하지 않습니다.

pub mod context;
pub mod http;
pub mod user_client;
pub mod blog_client;

use async_trait::async_trait;
use crate::domain::dto::blog::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, DeletePostRequest, DeletePostResponse,
    GetPostRequest, ListCommentsRequest, ListCommentsResponse, ListPostsRequest, ListPostsResponse,
    PostResponse, UpdatePostRequest,
};
use crate::domain::dto::users::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse,
};
use crate::errors::AppError;

pub use context::{RpcContext, REQUEST_ID_HEADER};
pub use http::RpcClient;
pub use user_client::UserServiceClient;
pub use blog_client::BlogServiceClient;

/// 사용자 서비스 RPC
#[async_trait(?Send)]
pub trait UserRpc: Send + Sync {
    async fn register(&self, ctx: &RpcContext, request: RegisterRequest) -> Result<RegisterResponse, AppError>;

    async fn login(&self, ctx: &RpcContext, request: LoginRequest) -> Result<LoginResponse, AppError>;

    async fn verify(&self, ctx: &RpcContext, request: VerifyRequest) -> Result<VerifyResponse, AppError>;
}

/// 블로그 서비스 RPC
#[async_trait(?Send)]
pub trait BlogRpc: Send + Sync {
    async fn create_post(&self, ctx: &RpcContext, request: CreatePostRequest) -> Result<PostResponse, AppError>;

    async fn get_post(&self, ctx: &RpcContext, request: GetPostRequest) -> Result<PostResponse, AppError>;

    async fn list_posts(&self, ctx: &RpcContext, request: ListPostsRequest) -> Result<ListPostsResponse, AppError>;

    async fn update_post(&self, ctx: &RpcContext, request: UpdatePostRequest) -> Result<PostResponse, AppError>;

    async fn delete_post(&self, ctx: &RpcContext, request: DeletePostRequest) -> Result<DeletePostResponse, AppError>;

    async fn create_comment(&self, ctx: &RpcContext, request: CreateCommentRequest) -> Result<CommentResponse, AppError>;

    async fn list_comments(&self, ctx: &RpcContext, request: ListCommentsRequest) -> Result<ListCommentsResponse, AppError>;
}
