//! 블로그 저장소 모듈

pub mod blog_repo;

pub use blog_repo::BlogRepository;
