//! # 게이트웨이 서비스
//!
//! 공개 요청을 하위 서비스 호출로 조합합니다.
//!
//! ```text
//! 인증 필요 요청:  Bearer 토큰 → User.Verify → Blog.{CreatePost|UpdatePost|DeletePost|CreateComment}
//! 읽기 전용 요청:  Blog.{GetPost|ListPosts|ListComments}
//! 계정 요청:       User.{Register|Login}
//! ```
//!
//! 게이트웨이는 상태를 갖지 않습니다. 두 클라이언트와 호출 기한만 보관하며,
//! 하위 서비스의 도메인 에러는 분류를 유지한 채 그대로 전달합니다.

use std::sync::Arc;
use std::time::Duration;
use validator::Validate;
use crate::clients::{BlogRpc, BlogServiceClient, RpcContext, UserRpc, UserServiceClient};
use crate::config::UpstreamConfig;
use crate::domain::dto::blog::{
    CommentResponse, DeletePostRequest, DeletePostResponse, GetPostRequest, ListCommentsRequest,
    ListCommentsResponse, ListPostsResponse, PostResponse,
};
use crate::domain::dto::gateway::{CreateCommentBody, CreatePostBody, ListPostsQuery, UpdatePostBody};
use crate::domain::dto::users::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyRequest};
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;

/// `Authorization` 헤더 값에서 Bearer 토큰 부분만 추출합니다.
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub struct GatewayService {
    users: Arc<dyn UserRpc>,
    blog: Arc<dyn BlogRpc>,
    rpc_timeout: Duration,
}

impl GatewayService {
    pub fn new(users: Arc<dyn UserRpc>, blog: Arc<dyn BlogRpc>, rpc_timeout: Duration) -> Self {
        Self {
            users,
            blog,
            rpc_timeout,
        }
    }

    /// 환경 설정의 하위 서비스 주소와 기한으로 HTTP 클라이언트를 구성합니다.
    pub fn from_env(http: reqwest::Client) -> Self {
        let users = UserServiceClient::new(http.clone(), UpstreamConfig::user_service_url());
        let blog = BlogServiceClient::new(http, UpstreamConfig::blog_service_url());
        Self::new(Arc::new(users), Arc::new(blog), UpstreamConfig::rpc_timeout())
    }

    pub fn rpc_timeout(&self) -> Duration {
        self.rpc_timeout
    }

    /// `Authorization` 헤더를 검증해 호출자 신원을 확정합니다.
    ///
    /// 헤더가 없거나, Bearer 형식이 아니거나, Verify가 `ok = false`를 돌려주면
    /// `AuthenticationError`입니다. 대체 신원으로 진행하지 않습니다.
    pub async fn authenticate(&self, ctx: &RpcContext, auth_header: Option<&str>) -> Result<AuthenticatedUser, AppError> {
        let token = auth_header
            .and_then(extract_bearer_token)
            .ok_or_else(|| AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string()))?;

        let verified = self.users
            .verify(ctx, VerifyRequest { token: token.to_string() })
            .await?;

        match (verified.ok, verified.user_id, verified.username) {
            (true, Some(user_id), Some(username)) => {
                log::debug!("[{}] 인증 성공: 사용자 ID {}", ctx.request_id, user_id);
                Ok(AuthenticatedUser { user_id, username })
            }
            _ => {
                log::warn!("[{}] 토큰 검증 실패", ctx.request_id);
                Err(AppError::AuthenticationError("유효하지 않거나 만료된 토큰입니다".to_string()))
            }
        }
    }

    pub async fn register(&self, ctx: &RpcContext, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        self.users.register(ctx, request).await
    }

    pub async fn login(&self, ctx: &RpcContext, request: LoginRequest) -> Result<LoginResponse, AppError> {
        self.users.login(ctx, request).await
    }

    pub async fn create_post(
        &self,
        ctx: &RpcContext,
        user: &AuthenticatedUser,
        body: CreatePostBody,
    ) -> Result<PostResponse, AppError> {
        body.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        self.blog.create_post(ctx, body.into_request(user.user_id)).await
    }

    pub async fn get_post(&self, ctx: &RpcContext, id: i64) -> Result<PostResponse, AppError> {
        self.blog.get_post(ctx, GetPostRequest { id }).await
    }

    pub async fn list_posts(&self, ctx: &RpcContext, query: ListPostsQuery) -> Result<ListPostsResponse, AppError> {
        self.blog.list_posts(ctx, query.into()).await
    }

    pub async fn update_post(
        &self,
        ctx: &RpcContext,
        user: &AuthenticatedUser,
        id: i64,
        body: UpdatePostBody,
    ) -> Result<PostResponse, AppError> {
        self.blog.update_post(ctx, body.into_request(id, user.user_id)).await
    }

    pub async fn delete_post(
        &self,
        ctx: &RpcContext,
        user: &AuthenticatedUser,
        id: i64,
    ) -> Result<DeletePostResponse, AppError> {
        self.blog.delete_post(ctx, DeletePostRequest { id, user_id: user.user_id }).await
    }

    pub async fn create_comment(
        &self,
        ctx: &RpcContext,
        user: &AuthenticatedUser,
        body: CreateCommentBody,
    ) -> Result<CommentResponse, AppError> {
        body.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        self.blog.create_comment(ctx, body.into_request(user.user_id)).await
    }

    pub async fn list_comments(&self, ctx: &RpcContext, post_id: i64) -> Result<ListCommentsResponse, AppError> {
        self.blog.list_comments(ctx, ListCommentsRequest { post_id }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use async_trait::async_trait;
    use crate::domain::dto::blog::{
        CreateCommentRequest, CreatePostRequest, ListPostsRequest, UpdatePostRequest,
    };
    use crate::domain::dto::users::VerifyResponse;
    use crate::domain::entities::PostRecord;

    /// "good" 토큰만 사용자 7로 인정하는 사용자 서비스
    struct FixedUsers;

    #[async_trait(?Send)]
    impl UserRpc for FixedUsers {
        async fn register(&self, _: &RpcContext, _: RegisterRequest) -> Result<RegisterResponse, AppError> {
            Ok(RegisterResponse { user_id: 7 })
        }

        async fn login(&self, _: &RpcContext, _: LoginRequest) -> Result<LoginResponse, AppError> {
            Err(AppError::AuthenticationError("no".to_string()))
        }

        async fn verify(&self, _: &RpcContext, request: VerifyRequest) -> Result<VerifyResponse, AppError> {
            Ok(match request.token.as_str() {
                "good" => VerifyResponse::verified(7, "alice".to_string()),
                _ => VerifyResponse::denied(),
            })
        }
    }

    /// 호출 횟수만 세고 작성자 ID를 그대로 돌려주는 블로그 서비스
    #[derive(Default)]
    struct CountingBlog {
        calls: AtomicUsize,
    }

    impl CountingBlog {
        fn post(&self, user_id: i64) -> Result<PostResponse, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(PostResponse {
                post: PostRecord::new(1, "Hi".to_string(), "World".to_string(), user_id, 0),
            })
        }
    }

    #[async_trait(?Send)]
    impl BlogRpc for CountingBlog {
        async fn create_post(&self, _: &RpcContext, request: CreatePostRequest) -> Result<PostResponse, AppError> {
            self.post(request.user_id)
        }

        async fn get_post(&self, _: &RpcContext, _: GetPostRequest) -> Result<PostResponse, AppError> {
            Err(AppError::NotFound("missing".to_string()))
        }

        async fn list_posts(&self, _: &RpcContext, _: ListPostsRequest) -> Result<ListPostsResponse, AppError> {
            Err(AppError::InternalError("unused".to_string()))
        }

        async fn update_post(&self, _: &RpcContext, request: UpdatePostRequest) -> Result<PostResponse, AppError> {
            self.post(request.user_id)
        }

        async fn delete_post(&self, _: &RpcContext, _: DeletePostRequest) -> Result<DeletePostResponse, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(DeletePostResponse { ok: true })
        }

        async fn create_comment(&self, _: &RpcContext, _: CreateCommentRequest) -> Result<CommentResponse, AppError> {
            Err(AppError::InternalError("unused".to_string()))
        }

        async fn list_comments(&self, _: &RpcContext, _: ListCommentsRequest) -> Result<ListCommentsResponse, AppError> {
            Ok(ListCommentsResponse { comments: Vec::new() })
        }
    }

    fn gateway() -> (GatewayService, Arc<CountingBlog>) {
        let blog = Arc::new(CountingBlog::default());
        let service = GatewayService::new(Arc::new(FixedUsers), blog.clone(), Duration::from_secs(1));
        (service, blog)
    }

    fn ctx() -> RpcContext {
        RpcContext::with_timeout(Duration::from_secs(1))
    }

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer_token("Bearer   "), None);
        assert_eq!(extract_bearer_token("Basic abc"), None);
        assert_eq!(extract_bearer_token("abc"), None);
    }

    #[actix_web::test]
    async fn test_authenticate_resolves_identity() {
        let (gateway, _) = gateway();

        let user = gateway.authenticate(&ctx(), Some("Bearer good")).await.unwrap();
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "alice");
    }

    #[actix_web::test]
    async fn test_authenticate_rejects_missing_and_invalid_tokens() {
        let (gateway, _) = gateway();

        for header in [None, Some("good"), Some("Bearer bad")] {
            let result = gateway.authenticate(&ctx(), header).await;
            assert!(matches!(result, Err(AppError::AuthenticationError(_))));
        }
    }

    #[actix_web::test]
    async fn test_create_post_uses_verified_identity() {
        let (gateway, blog) = gateway();
        let user = gateway.authenticate(&ctx(), Some("Bearer good")).await.unwrap();

        let body = CreatePostBody { title: "Hi".to_string(), content: "World".to_string() };
        let response = gateway.create_post(&ctx(), &user, body).await.unwrap();

        assert_eq!(response.post.user_id, 7);
        assert_eq!(blog.calls.load(Ordering::SeqCst), 1);
    }

    #[actix_web::test]
    async fn test_invalid_body_never_reaches_blog_service() {
        let (gateway, blog) = gateway();
        let user = AuthenticatedUser { user_id: 7, username: "alice".to_string() };

        let body = CreatePostBody { title: " ".to_string(), content: "World".to_string() };
        let result = gateway.create_post(&ctx(), &user, body).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(blog.calls.load(Ordering::SeqCst), 0);
    }

    #[actix_web::test]
    async fn test_downstream_classification_is_preserved() {
        let (gateway, _) = gateway();

        let result = gateway.get_post(&ctx(), 99).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
