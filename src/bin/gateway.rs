//! 공개 HTTP 게이트웨이 프로세스
//!
//! 외부 요청을 받아 인증 후 사용자/블로그 서비스로 전달합니다.

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use blog_gateway::bootstrap::{configure_cors, init_logging, load_env_file, load_rate_limit_config};
use blog_gateway::config::{ServerConfig, ServiceRole, UpstreamConfig};
use blog_gateway::routes::configure_gateway_routes;
use blog_gateway::services::gateway::GatewayService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    let role = ServiceRole::Gateway;
    let bind_address = ServerConfig::bind_address(role);

    let http = reqwest::Client::builder()
        .build()
        .map_err(std::io::Error::other)?;
    let gateway = web::Data::new(GatewayService::from_env(http));

    info!("🚀 {} 시작: http://{}", role.as_str(), bind_address);
    info!("📡 user-service: {}", UpstreamConfig::user_service_url());
    info!("📡 blog-service: {}", UpstreamConfig::blog_service_url());
    info!("⏱️ RPC 기한: {:?}", gateway.rpc_timeout());

    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_gateway_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}
