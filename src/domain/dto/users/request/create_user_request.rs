//! 사용자 등록 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 요청 데이터 구조를 정의합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{validate_not_blank, validate_optional_email};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom(function = "validate_not_blank", message = "사용자명은 필수입니다"))]
    pub username: String,

    #[validate(custom(function = "validate_not_blank", message = "비밀번호는 필수입니다"))]
    pub password: String,

    #[serde(default)]
    #[validate(custom(function = "validate_optional_email"))]
    pub email: String,
}
