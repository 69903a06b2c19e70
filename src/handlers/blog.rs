//! # Blog Service RPC Handlers
//!
//! `/rpc/blog` 스코프 아래의 게시글/댓글 RPC입니다.
//! 요청의 `user_id`는 게이트웨이가 검증한 값으로 간주합니다.

use actix_web::{post, web, HttpResponse};
use crate::domain::dto::blog::request::{
    CreateCommentRequest, CreatePostRequest, DeletePostRequest, GetPostRequest, ListCommentsRequest,
    ListPostsRequest, UpdatePostRequest,
};
use crate::errors::AppError;
use crate::services::blog::BlogService;

#[post("/create_post")]
pub async fn create_post(
    service: web::Data<BlogService>,
    payload: web::Json<CreatePostRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.create_post(payload.into_inner())?))
}

#[post("/get_post")]
pub async fn get_post(
    service: web::Data<BlogService>,
    payload: web::Json<GetPostRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.get_post(payload.into_inner())?))
}

#[post("/list_posts")]
pub async fn list_posts(
    service: web::Data<BlogService>,
    payload: web::Json<ListPostsRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_posts(payload.into_inner())?))
}

#[post("/update_post")]
pub async fn update_post(
    service: web::Data<BlogService>,
    payload: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.update_post(payload.into_inner())?))
}

#[post("/delete_post")]
pub async fn delete_post(
    service: web::Data<BlogService>,
    payload: web::Json<DeletePostRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.delete_post(payload.into_inner())?))
}

#[post("/create_comment")]
pub async fn create_comment(
    service: web::Data<BlogService>,
    payload: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.create_comment(payload.into_inner())?))
}

#[post("/list_comments")]
pub async fn list_comments(
    service: web::Data<BlogService>,
    payload: web::Json<ListCommentsRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(service.list_comments(payload.into_inner())?))
}
