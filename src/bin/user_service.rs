//! 사용자 서비스 프로세스
//!
//! 사용자 레코드를 메모리에 보관하고 `/rpc/user/*` RPC를 제공합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use blog_gateway::bootstrap::{init_logging, load_env_file};
use blog_gateway::config::{PasswordConfig, ServerConfig, ServiceRole};
use blog_gateway::repositories::UserRepository;
use blog_gateway::routes::configure_user_service_routes;
use blog_gateway::services::auth::TokenService;
use blog_gateway::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    let role = ServiceRole::UserService;
    let bind_address = ServerConfig::bind_address(role);

    let user_service = web::Data::new(UserService::new(
        Arc::new(UserRepository::new()),
        TokenService::from_env(),
        PasswordConfig::bcrypt_cost(),
    ));

    info!("🚀 {} 시작: http://{}", role.as_str(), bind_address);
    info!("🔐 bcrypt cost: {}", PasswordConfig::bcrypt_cost());

    HttpServer::new(move || {
        App::new()
            .app_data(user_service.clone())
            .wrap(middleware::Logger::default())
            .configure(configure_user_service_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}
