//! User Entity Implementation
//!
//! 사용자 서비스 메모리에 보관되는 사용자 레코드입니다.
//! 비밀번호는 bcrypt 해시로만 보관되며, 레코드 자체는 직렬화되지 않아
//! 서비스 밖으로 해시가 새어 나가지 않습니다.

use chrono::Utc;

#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    /// 서비스가 부여하는 단조 증가 ID (외부에 노출되는 식별자)
    pub id: i64,
    /// 로그인 조회 키, 전체 레코드에서 유일
    pub username: String,
    pub password_hash: String,
    pub email: String,
    /// 생성 시각 (unix seconds)
    pub created_at: i64,
}

impl UserRecord {
    pub fn new(id: i64, username: String, password_hash: String, email: String) -> Self {
        Self {
            id,
            username,
            password_hash,
            email,
            created_at: Utc::now().timestamp(),
        }
    }
}
