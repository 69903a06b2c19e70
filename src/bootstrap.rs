//! # 프로세스 기동 공통 처리
//!
//! 세 바이너리가 공유하는 환경 파일 로드, 로깅 초기화, 게이트웨이의
//! Rate Limiting/CORS 구성을 모아 둔 모듈입니다.

use actix_cors::Cors;
use actix_web::http::header;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use crate::clients::REQUEST_ID_HEADER;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

/// `PROFILE`에 따라 환경 파일을 로드합니다.
///
/// | PROFILE | 파일 |
/// |---------|------|
/// | `dev` (기본값) | `.env.dev` |
/// | `prod` | `.env.prod` |
/// | 그 외 | `.env` |
///
/// 파일이 없어도 기동은 계속되며, 이미 설정된 환경 변수가 우선합니다.
pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// # Environment Variables
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// # 게이트웨이 인증 흐름만 debug
/// RUST_LOG=info,blog_gateway::services::gateway=debug cargo run --bin gateway
/// ```
pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
pub fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

/// 게이트웨이 CORS 설정
///
/// 프론트엔드 개발 서버와 게이트웨이 자신의 주소를 허용합니다.
pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .allowed_header(REQUEST_ID_HEADER)
        .expose_headers(vec![REQUEST_ID_HEADER])
        .max_age(3600)
}
