//! # 저장소 계층
//!
//! 각 서비스 프로세스가 소유하는 인메모리 저장소입니다.
//! 전역 상태 없이 인스턴스가 자신의 데이터와 ID 카운터를 소유하며,
//! 애플리케이션 상태(`web::Data`)를 통해 핸들러에 공유됩니다.

pub mod users;
pub mod blog;

pub use users::UserRepository;
pub use blog::BlogRepository;
