//! 사용자 서비스 HTTP 클라이언트

use async_trait::async_trait;
use crate::clients::{RpcClient, RpcContext, UserRpc};
use crate::domain::dto::users::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, VerifyRequest, VerifyResponse,
};
use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct UserServiceClient {
    rpc: RpcClient,
}

impl UserServiceClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            rpc: RpcClient::new(http, base_url, "user-service"),
        }
    }
}

#[async_trait(?Send)]
impl UserRpc for UserServiceClient {
    async fn register(&self, ctx: &RpcContext, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        self.rpc.call(ctx, "/rpc/user/register", &request).await
    }

    async fn login(&self, ctx: &RpcContext, request: LoginRequest) -> Result<LoginResponse, AppError> {
        self.rpc.call(ctx, "/rpc/user/login", &request).await
    }

    async fn verify(&self, ctx: &RpcContext, request: VerifyRequest) -> Result<VerifyResponse, AppError> {
        self.rpc.call(ctx, "/rpc/user/verify", &request).await
    }
}
