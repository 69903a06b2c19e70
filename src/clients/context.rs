//! 요청 단위 RPC 컨텍스트
//!
//! 게이트웨이로 들어온 요청 하나가 하위 서비스를 여러 번 호출하더라도
//! (Verify → CreatePost) 같은 요청 ID와 같은 기한을 공유합니다.

use std::future::{ready, Ready};
use std::time::{Duration, Instant};
use actix_web::{web, Error, FromRequest, HttpMessage, HttpRequest};
use uuid::Uuid;
use crate::config::UpstreamConfig;
use crate::errors::AppError;
use crate::services::gateway::GatewayService;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Debug, Clone)]
pub struct RpcContext {
    pub request_id: String,
    pub deadline: Instant,
}

impl RpcContext {
    pub fn new(request_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            request_id: request_id.into(),
            deadline: Instant::now() + timeout,
        }
    }

    /// 새 UUID v4 요청 ID로 컨텍스트를 만듭니다.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new(Uuid::new_v4().to_string(), timeout)
    }

    /// 기한까지 남은 시간, 이미 지났으면 `DeadlineExceeded`
    pub fn remaining(&self) -> Result<Duration, AppError> {
        let remaining = self.deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(AppError::DeadlineExceeded(format!(
                "요청 기한 초과 (request_id: {})", self.request_id
            )));
        }
        Ok(remaining)
    }
}

/// 요청 확장에 캐시되어, 같은 요청 안의 모든 추출자가 동일한 컨텍스트를 봅니다.
impl FromRequest for RpcContext {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        if let Some(ctx) = req.extensions().get::<RpcContext>() {
            return ready(Ok(ctx.clone()));
        }

        let request_id = req.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let timeout = req.app_data::<web::Data<GatewayService>>()
            .map(|gateway| gateway.rpc_timeout())
            .unwrap_or_else(UpstreamConfig::rpc_timeout);

        let ctx = RpcContext::new(request_id, timeout);
        req.extensions_mut().insert(ctx.clone());
        ready(Ok(ctx))
    }
}
