//! # Gateway Public HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 하위 호출 | 상태 코드 |
//! |--------|------|------|-----------|-----------|
//! | `POST` | `/register` | - | User.Register | 201 |
//! | `POST` | `/login` | - | User.Login | 200 |
//! | `POST` | `/posts` | Bearer | Verify → Blog.CreatePost | 201 |
//! | `GET` | `/posts?page&size` | - | Blog.ListPosts | 200 |
//! | `GET` | `/posts/{id}` | - | Blog.GetPost | 200 |
//! | `PUT` | `/posts/{id}` | Bearer | Verify → Blog.UpdatePost | 200 |
//! | `DELETE` | `/posts/{id}` | Bearer | Verify → Blog.DeletePost | 200 |
//! | `POST` | `/comments` | Bearer | Verify → Blog.CreateComment | 201 |
//! | `GET` | `/posts/{id}/comments` | - | Blog.ListComments | 200 |
//!
//! 인증이 필요한 핸들러는 [`AuthenticatedUser`] 추출자를 인자로 받습니다.
//! 추출자가 실패하면 핸들러 본문은 실행되지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::clients::RpcContext;
use crate::domain::dto::gateway::{CreateCommentBody, CreatePostBody, ListPostsQuery, UpdatePostBody};
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::models::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::gateway::GatewayService;

#[post("/register")]
pub async fn register(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.register(&ctx, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/login")]
pub async fn login(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.login(&ctx, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/posts")]
pub async fn create_post(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    user: AuthenticatedUser,
    payload: web::Json<CreatePostBody>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.create_post(&ctx, &user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/posts")]
pub async fn list_posts(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.list_posts(&ctx, query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/posts/{id}")]
pub async fn get_post(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.get_post(&ctx, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[put("/posts/{id}")]
pub async fn update_post(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    user: AuthenticatedUser,
    id: web::Path<i64>,
    payload: web::Json<UpdatePostBody>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.update_post(&ctx, &user, id.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[delete("/posts/{id}")]
pub async fn delete_post(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    user: AuthenticatedUser,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.delete_post(&ctx, &user, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/comments")]
pub async fn create_comment(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    user: AuthenticatedUser,
    payload: web::Json<CreateCommentBody>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.create_comment(&ctx, &user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/posts/{id}/comments")]
pub async fn list_comments(
    gateway: web::Data<GatewayService>,
    ctx: RpcContext,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let response = gateway.list_comments(&ctx, id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
