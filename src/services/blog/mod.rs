//! 블로그 서비스 모듈
//!
//! 게시글/댓글 RPC의 비즈니스 로직을 담당합니다. 신원 확인은 하지 않으며
//! 호출자가 전달한 `user_id`를 그대로 신뢰합니다.

pub mod blog_service;

pub use blog_service::BlogService;
