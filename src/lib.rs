//! # blog_gateway
//!
//! 공개 게이트웨이와 두 개의 도메인 서비스(사용자, 블로그)로 구성된
//! 블로그 백엔드입니다. 세 프로세스는 같은 라이브러리를 공유하고
//! JSON-over-HTTP RPC로 통신합니다.
//!
//! | 바이너리 | 기본 포트 | 역할 |
//! |----------|-----------|------|
//! | `user-service` | 8081 | 사용자 등록/로그인/토큰 검증 |
//! | `blog-service` | 8082 | 게시글/댓글 저장 |
//! | `gateway` | 8080 | 공개 HTTP API, 인증 후 하위 서비스 호출 |

pub mod bootstrap;
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
