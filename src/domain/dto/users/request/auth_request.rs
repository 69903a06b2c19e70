//! 인증 요청관련 DTO
//!
//! 로그인과 토큰 검증 요청 정보를 매핑합니다.
//! 로그인 요청은 형식 검증을 하지 않습니다. 빈 값도 자격 증명 불일치와
//! 동일하게 인증 실패로 처리되어야 하기 때문입니다.

use serde::{Deserialize, Serialize};

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

/// 토큰 검증 요청 구조체 (Bearer 접두사 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(default)]
    pub token: String,
}
