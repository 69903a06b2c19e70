//! # User Service RPC Handlers
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/rpc/user/register` | 사용자 등록 |
//! | `POST` | `/rpc/user/login` | 로그인, 액세스 토큰 발급 |
//! | `POST` | `/rpc/user/verify` | 토큰 검증 (`ok = false`는 에러가 아님) |

use actix_web::{post, web, HttpResponse};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest, VerifyRequest};
use crate::errors::AppError;
use crate::services::users::UserService;

#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/verify")]
pub async fn verify(
    service: web::Data<UserService>,
    payload: web::Json<VerifyRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.verify(payload.into_inner())?;
    Ok(HttpResponse::Ok().json(response))
}
