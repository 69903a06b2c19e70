use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: i64,
    pub token_type: String,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(token: String, user_id: i64, expires_in: i64) -> Self {
        Self {
            token,
            user_id,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}

/// 토큰 검증 결과
///
/// 검증 실패는 에러가 아니라 `ok = false` 응답으로 표현됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl VerifyResponse {
    pub fn verified(user_id: i64, username: String) -> Self {
        Self {
            ok: true,
            user_id: Some(user_id),
            username: Some(username),
        }
    }

    pub fn denied() -> Self {
        Self {
            ok: false,
            user_id: None,
            username: None,
        }
    }
}
