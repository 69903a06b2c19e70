//! JWT 인증 토큰 클레임
//!
//! 사용자 서비스가 로그인 시 발급하는 HS256 토큰의 페이로드입니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (사용자 ID의 10진 문자열)
/// - `username`: 발급 시점의 사용자명
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl TokenClaims {
    /// `sub` 클레임을 사용자 ID로 해석합니다.
    pub fn user_id(&self) -> Option<i64> {
        self.sub.parse().ok()
    }
}
