//! JWT 토큰 관리 서비스 구현
//!
//! 로그인 성공 시 서명된 액세스 토큰을 발급하고, 토큰 검증 요청에서
//! 서명과 만료 시간을 확인합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use crate::config::JwtConfig;
use crate::domain::entities::UserRecord;
use crate::domain::models::TokenClaims;
use crate::errors::{AppError, ErrorContext};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명 키와 토큰 수명을 인스턴스가 소유합니다.
/// 테스트에서는 `new`로 임의의 키/수명을 주입하고, 서비스 바이너리는
/// `from_env`로 환경 설정을 사용합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), Duration::hours(JwtConfig::expiration_hours()))
    }

    /// 토큰 수명 (초)
    pub fn expires_in(&self) -> i64 {
        self.ttl.num_seconds()
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 서명 실패
    pub fn issue(&self, user: &UserRecord) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 빈 토큰, 형식 오류, 서명 불일치, 만료 토큰은 모두 `None`입니다.
    /// 검증 실패는 호출자에게 에러가 아니라 "인증되지 않음"이라는 결과이므로
    /// 원인은 debug 로그로만 남깁니다.
    pub fn verify(&self, token: &str) -> Option<TokenClaims> {
        if token.trim().is_empty() {
            return None;
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        match decode::<TokenClaims>(token, &self.decoding_key, &validation) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                None
            }
        }
    }
}
