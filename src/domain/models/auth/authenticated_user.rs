use actix_web::{web, Error, FromRequest, HttpRequest};
use actix_web::http::header::AUTHORIZATION;
use futures_util::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};
use crate::clients::RpcContext;
use crate::errors::AppError;
use crate::services::gateway::GatewayService;

/// 게이트웨이가 Verify로 확인한 호출자 신원
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 핸들러 인자로 선언하면 `Authorization: Bearer <token>`을 사용자 서비스로
/// 검증한 뒤에만 핸들러가 실행됩니다. 검증 실패 시 401 응답이 반환되고
/// 블로그 서비스는 호출되지 않습니다.
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut actix_web::dev::Payload) -> Self::Future {
        let gateway = req.app_data::<web::Data<GatewayService>>().cloned();
        let auth_header = req.headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string);
        let ctx = RpcContext::from_request(req, payload);

        Box::pin(async move {
            let gateway = gateway.ok_or_else(|| {
                AppError::InternalError("GatewayService가 등록되지 않았습니다".to_string())
            })?;
            let ctx = ctx.await?;

            let user = gateway.authenticate(&ctx, auth_header.as_deref()).await?;
            Ok(user)
        })
    }
}
