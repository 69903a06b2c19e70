//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정 등록, 로그인, 토큰 검증을 담당하는 비즈니스 로직입니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                     UserService                       │
//! │  ┌──────────────┐  ┌──────────────┐  ┌─────────────┐  │
//! │  │  Register    │  │    Login     │  │   Verify    │  │
//! │  │ • Input Chk  │  │ • bcrypt Ver │  │ • JWT Check │  │
//! │  │ • bcrypt     │  │ • JWT Issue  │  │ • Id Lookup │  │
//! │  └──────────────┘  └──────────────┘  └─────────────┘  │
//! └───────────────────────────┬───────────────────────────┘
//!                             ▼
//!          UserRepository (RwLock, id → username 인덱스)
//!          TokenService   (HS256 서명/검증)
//! ```
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 해싱/검증은 `web::block`으로 블로킹 스레드 풀에서 실행되며,
//!   저장소 락을 잡은 상태로는 절대 실행되지 않습니다.
//! - **동일한 실패 응답**: 존재하지 않는 사용자와 비밀번호 불일치는
//!   같은 `AuthenticationError`로 응답합니다.
//! - **민감 정보 제거**: 응답 DTO에는 비밀번호 해시가 포함되지 않습니다.

use std::sync::Arc;
use std::time::Instant;
use actix_web::web;
use validator::Validate;
use crate::domain::dto::users::{
    request::{LoginRequest, RegisterRequest, VerifyRequest},
    response::{LoginResponse, RegisterResponse, VerifyResponse},
};
use crate::errors::{AppError, ErrorContext};
use crate::repositories::UserRepository;
use crate::services::auth::TokenService;

const INVALID_CREDENTIALS: &str = "사용자명 또는 비밀번호가 올바르지 않습니다";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 저장소와 토큰 서비스를 인스턴스로 소유하며, 애플리케이션 상태
/// (`web::Data<UserService>`)로 핸들러에 공유됩니다.
pub struct UserService {
    user_repo: Arc<UserRepository>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_repo: Arc<UserRepository>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            tokens,
            bcrypt_cost,
        }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(RegisterResponse)` - 발급된 사용자 ID
    /// * `Err(AppError::ValidationError)` - 사용자명/비밀번호 누락, 이메일 형식 오류
    /// * `Err(AppError::ConflictError)` - 사용자명 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. **입력 검증**: `validator` 기반 필수값/형식 검사
    /// 2. **중복 사전 확인**: 이미 있는 사용자명이면 해싱 비용 없이 거절
    /// 3. **비밀번호 해싱**: 블로킹 스레드 풀에서 bcrypt 실행
    /// 4. **저장**: 쓰기 락 안에서 중복 재확인 후 삽입 (동시 등록 경쟁 처리)
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        request.validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        if self.user_repo.find_by_username(&request.username)?.is_some() {
            log::warn!("중복 사용자명 등록 시도: {}", request.username);
            return Err(AppError::ConflictError(format!("이미 사용 중인 사용자명입니다: {}", request.username)));
        }

        let cost = self.bcrypt_cost;
        let password = request.password;
        let hash_start = Instant::now();
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .context("해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let user = self.user_repo.create(request.username, password_hash, request.email)?;
        log::info!("사용자 등록 완료 - ID: {}, 사용자명: {}", user.id, user.username);

        Ok(RegisterResponse { user_id: user.id })
    }

    /// 로그인 후 서명된 액세스 토큰 발급
    ///
    /// 사용자가 없거나 비밀번호가 일치하지 않으면 `AuthenticationError`입니다.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = match self.user_repo.find_by_username(&request.username)? {
            Some(user) => user,
            None => {
                log::warn!("로그인 실패 - 존재하지 않는 사용자: {}", request.username);
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
            }
        };

        let password = request.password;
        let password_hash = user.password_hash.clone();
        let verified = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .context("비밀번호 검증 작업 실행 실패")?
            .unwrap_or(false);

        if !verified {
            log::warn!("로그인 실패 - 비밀번호 불일치: {}", user.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(&user)?;
        log::info!("로그인 성공 - ID: {}", user.id);

        Ok(LoginResponse::bearer(token, user.id, self.tokens.expires_in()))
    }

    /// 토큰 검증
    ///
    /// 서명/만료 검증에 실패하거나 토큰의 사용자가 더 이상 조회되지 않으면
    /// `ok = false`를 반환합니다. 저장소 락 손상 외에는 에러를 반환하지 않습니다.
    ///
    /// ID는 재기동 시 1부터 다시 발급되므로, 같은 ID의 레코드라도 서명된
    /// `username` 클레임과 사용자명이 다르면 거부합니다.
    pub fn verify(&self, request: VerifyRequest) -> Result<VerifyResponse, AppError> {
        let Some(claims) = self.tokens.verify(&request.token) else {
            return Ok(VerifyResponse::denied());
        };
        let Some(user_id) = claims.user_id() else {
            return Ok(VerifyResponse::denied());
        };

        Ok(match self.user_repo.find_by_id(user_id)? {
            Some(user) if user.username == claims.username => {
                VerifyResponse::verified(user.id, user.username)
            }
            Some(user) => {
                log::warn!(
                    "토큰 사용자 불일치 - ID: {}, 토큰: {}, 저장소: {}",
                    user_id, claims.username, user.username
                );
                VerifyResponse::denied()
            }
            None => VerifyResponse::denied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn service() -> UserService {
        UserService::new(
            Arc::new(UserRepository::new()),
            TokenService::new("test-secret", Duration::hours(1)),
            4,
        )
    }

    fn register_request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: format!("{}@x.com", username),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_assigns_sequential_ids() {
        let service = service();

        let alice = service.register(register_request("alice", "pw")).await.unwrap();
        let bob = service.register(register_request("bob", "pw")).await.unwrap();

        assert_eq!(alice.user_id, 1);
        assert_eq!(bob.user_id, 2);
    }

    #[actix_web::test]
    async fn test_duplicate_register_is_conflict() {
        let service = service();
        service.register(register_request("alice", "pw")).await.unwrap();

        let result = service.register(register_request("alice", "other")).await;
        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_register_rejects_blank_fields() {
        let service = service();

        let result = service.register(register_request("", "pw")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = service.register(register_request("alice", "  ")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_login_then_verify_returns_same_user() {
        let service = service();
        let registered = service.register(register_request("alice", "pw")).await.unwrap();

        let login = service.login(login_request("alice", "pw")).await.unwrap();
        assert_eq!(login.user_id, registered.user_id);
        assert_eq!(login.token_type, "Bearer");
        assert_eq!(login.expires_in, 3600);

        let verified = service.verify(VerifyRequest { token: login.token }).unwrap();
        assert_eq!(verified, VerifyResponse::verified(registered.user_id, "alice".to_string()));
    }

    #[actix_web::test]
    async fn test_login_failures_are_unauthenticated() {
        let service = service();
        service.register(register_request("alice", "pw")).await.unwrap();

        let wrong_password = service.login(login_request("alice", "nope")).await;
        assert!(matches!(wrong_password, Err(AppError::AuthenticationError(_))));

        let unknown = service.login(login_request("carol", "pw")).await;
        assert!(matches!(unknown, Err(AppError::AuthenticationError(_))));
    }

    #[test]
    fn test_verify_invalid_tokens_is_not_an_error() {
        let service = service();

        for token in ["", "garbage", "a.b.c"] {
            let result = service.verify(VerifyRequest { token: token.to_string() }).unwrap();
            assert_eq!(result, VerifyResponse::denied());
        }
    }

    #[actix_web::test]
    async fn test_verify_token_from_other_process_is_denied() {
        let issuer = service();
        issuer.register(register_request("alice", "pw")).await.unwrap();
        let login = issuer.login(login_request("alice", "pw")).await.unwrap();

        // 같은 키를 쓰지만 사용자 레코드가 없는 인스턴스
        let fresh = service();
        let result = fresh.verify(VerifyRequest { token: login.token }).unwrap();
        assert!(!result.ok);
    }

    #[actix_web::test]
    async fn test_verify_rejects_token_when_id_was_reissued_to_other_user() {
        let issuer = service();
        issuer.register(register_request("alice", "pw")).await.unwrap();
        let login = issuer.login(login_request("alice", "pw")).await.unwrap();

        // 재기동 후 같은 ID 1이 다른 사용자에게 발급된 상황
        let restarted = service();
        let mallory = restarted.register(register_request("mallory", "pw")).await.unwrap();
        assert_eq!(mallory.user_id, login.user_id);

        let result = restarted.verify(VerifyRequest { token: login.token }).unwrap();
        assert_eq!(result, VerifyResponse::denied());
    }
}
