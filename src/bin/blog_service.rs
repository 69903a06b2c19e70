//! 블로그 서비스 프로세스
//!
//! 게시글과 댓글을 메모리에 보관하고 `/rpc/blog/*` RPC를 제공합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use blog_gateway::bootstrap::{init_logging, load_env_file};
use blog_gateway::config::{ServerConfig, ServiceRole};
use blog_gateway::repositories::BlogRepository;
use blog_gateway::routes::configure_blog_service_routes;
use blog_gateway::services::blog::BlogService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    let role = ServiceRole::BlogService;
    let bind_address = ServerConfig::bind_address(role);

    let blog_service = web::Data::new(BlogService::new(Arc::new(BlogRepository::new())));

    info!("🚀 {} 시작: http://{}", role.as_str(), bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(blog_service.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_blog_service_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}
