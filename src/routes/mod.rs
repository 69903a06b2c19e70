//! # 라우트 구성
//!
//! 프로세스별 라우트 구성 함수입니다. 각 바이너리는 자신의 구성 함수 하나만
//! `App::configure`에 전달합니다.
//!
//! - [`configure_user_service_routes`] - `/rpc/user/*`, `/health`
//! - [`configure_blog_service_routes`] - `/rpc/blog/*`, `/health`
//! - [`configure_gateway_routes`] - 공개 API, `/health`
//!
//! 본문/쿼리/경로 파싱 실패도 다른 에러와 같은 `{"code", "error"}` 형식의
//! `INVALID_ARGUMENT`로 응답하도록 추출자 설정을 함께 등록합니다.

use actix_web::{get, web, HttpResponse};
use serde_json::json;
use crate::config::{Environment, ServiceRole};
use crate::errors::AppError;
use crate::handlers;

pub fn configure_user_service_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    cfg.app_data(web::Data::new(ServiceRole::UserService));
    cfg.service(health_check);

    cfg.service(
        web::scope("/rpc/user")
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::verify)
    );
}

pub fn configure_blog_service_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    cfg.app_data(web::Data::new(ServiceRole::BlogService));
    cfg.service(health_check);

    cfg.service(
        web::scope("/rpc/blog")
            .service(handlers::blog::create_post)
            .service(handlers::blog::get_post)
            .service(handlers::blog::list_posts)
            .service(handlers::blog::update_post)
            .service(handlers::blog::delete_post)
            .service(handlers::blog::create_comment)
            .service(handlers::blog::list_comments)
    );
}

pub fn configure_gateway_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);
    cfg.app_data(web::Data::new(ServiceRole::Gateway));
    cfg.service(health_check);

    cfg.service(handlers::gateway::register)
        .service(handlers::gateway::login)
        .service(handlers::gateway::create_post)
        .service(handlers::gateway::list_posts)
        .service(handlers::gateway::get_post)
        .service(handlers::gateway::update_post)
        .service(handlers::gateway::delete_post)
        .service(handlers::gateway::create_comment)
        .service(handlers::gateway::list_comments);
}

fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 요청 본문: {}", err)).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 파라미터: {}", err)).into()
    }));
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 경로 파라미터: {}", err)).into()
    }));
}

#[get("/health")]
async fn health_check(role: web::Data<ServiceRole>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": role.as_str(),
        "environment": Environment::current().as_str(),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{test, App};
    use chrono::Duration;
    use crate::repositories::{BlogRepository, UserRepository};
    use crate::services::auth::TokenService;
    use crate::services::blog::BlogService;
    use crate::services::users::UserService;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(
            Arc::new(UserRepository::new()),
            TokenService::new("test-secret", Duration::hours(1)),
            4,
        ))
    }

    fn blog_service() -> web::Data<BlogService> {
        web::Data::new(BlogService::new(Arc::new(BlogRepository::new())))
    }

    #[actix_web::test]
    async fn test_health_reports_service_role() {
        let app = test::init_service(
            App::new()
                .app_data(blog_service())
                .configure(configure_blog_service_routes)
        ).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "blog-service");
    }

    #[actix_web::test]
    async fn test_user_rpc_register_login_verify() {
        let app = test::init_service(
            App::new()
                .app_data(user_service())
                .configure(configure_user_service_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/rpc/user/register")
            .set_json(json!({ "username": "alice", "password": "pw", "email": "a@x.com" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user_id"], 1);

        let req = test::TestRequest::post()
            .uri("/rpc/user/register")
            .set_json(json!({ "username": "alice", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "ALREADY_EXISTS");

        let req = test::TestRequest::post()
            .uri("/rpc/user/login")
            .set_json(json!({ "username": "alice", "password": "pw" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let token = body["token"].as_str().unwrap().to_string();
        assert_eq!(body["token_type"], "Bearer");

        let req = test::TestRequest::post()
            .uri("/rpc/user/verify")
            .set_json(json!({ "token": token }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["username"], "alice");

        let req = test::TestRequest::post()
            .uri("/rpc/user/verify")
            .set_json(json!({ "token": "garbage" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
    }

    #[actix_web::test]
    async fn test_blog_rpc_error_codes() {
        let app = test::init_service(
            App::new()
                .app_data(blog_service())
                .configure(configure_blog_service_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/rpc/blog/create_post")
            .set_json(json!({ "title": "Hi", "content": "World", "user_id": 1 }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["post"]["id"], 1);

        let req = test::TestRequest::post()
            .uri("/rpc/blog/update_post")
            .set_json(json!({ "id": 1, "user_id": 2, "title": "x" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "PERMISSION_DENIED");

        let req = test::TestRequest::post()
            .uri("/rpc/blog/get_post")
            .set_json(json!({ "id": 99 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_invalid_argument() {
        let app = test::init_service(
            App::new()
                .app_data(blog_service())
                .configure(configure_blog_service_routes)
        ).await;

        let req = test::TestRequest::post()
            .uri("/rpc/blog/get_post")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "INVALID_ARGUMENT");
    }
}
