//! JSON-over-HTTP RPC 호출 공통 구현
//!
//! ## 에러 매핑
//!
//! | 상황 | AppError |
//! |------|----------|
//! | 기한 초과 (`reqwest` timeout) | `DeadlineExceeded` (504) |
//! | 연결 실패 등 전송 오류 | `ServiceUnavailable` (503) |
//! | 하위 서비스 에러 응답 | [`AppError::from_downstream`] |
//! | 성공 응답 파싱 실패 | `InternalError` (500) |

use actix_web::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::clients::context::{RpcContext, REQUEST_ID_HEADER};
use crate::errors::{AppError, ErrorBody};

#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    base_url: String,
    /// 로그에 남길 하위 서비스 이름
    service: &'static str,
}

impl RpcClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, service: &'static str) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST {base_url}{path}`로 요청 본문을 보내고 응답 본문을 역직렬화합니다.
    pub async fn call<Req, Res>(&self, ctx: &RpcContext, path: &str, request: &Req) -> Result<Res, AppError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let timeout = ctx.remaining()?;
        let url = format!("{}{}", self.base_url, path);

        let response = self.http
            .post(&url)
            .header(REQUEST_ID_HEADER, ctx.request_id.as_str())
            .timeout(timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| self.transport_error(ctx, path, e))?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !status.is_success() {
            let body = response.json::<ErrorBody>().await.ok();
            let error = AppError::from_downstream(status, body);
            if matches!(error, AppError::InternalError(_)) {
                log::error!(
                    "[{}] {} {} 실패: {}", ctx.request_id, self.service, path, error
                );
            }
            return Err(error);
        }

        response
            .json::<Res>()
            .await
            .map_err(|e| self.transport_error(ctx, path, e))
    }

    fn transport_error(&self, ctx: &RpcContext, path: &str, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            log::warn!("[{}] {} {} 기한 초과", ctx.request_id, self.service, path);
            AppError::DeadlineExceeded(format!("{} 호출 기한 초과", self.service))
        } else if error.is_decode() {
            log::error!("[{}] {} {} 응답 파싱 실패: {}", ctx.request_id, self.service, path, error);
            AppError::InternalError(format!("{} 응답 파싱 실패: {}", self.service, error))
        } else {
            log::error!("[{}] {} {} 호출 실패: {}", ctx.request_id, self.service, path, error);
            AppError::ServiceUnavailable(format!("{} 호출 실패: {}", self.service, error))
        }
    }
}
