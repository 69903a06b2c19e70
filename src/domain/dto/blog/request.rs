//! 블로그 서비스 RPC 요청 DTO
//!
//! 모든 요청은 호출자가 확인한 `user_id`를 그대로 신뢰합니다.
//! 신원 확인은 게이트웨이의 책임입니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{deserialize_optional_string, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(custom(function = "validate_not_blank", message = "제목은 필수입니다"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "내용은 필수입니다"))]
    pub content: String,

    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostRequest {
    pub id: i64,
}

/// 게시글 목록 요청
///
/// 값이 없거나 범위를 벗어난 페이지 파라미터는 서비스에서 정규화됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
}

/// 게시글 부분 수정 요청
///
/// `title`, `content`가 비어 있거나 없으면 기존 값을 유지합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub id: i64,
    pub user_id: i64,
    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string", skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(custom(function = "validate_not_blank", message = "댓글 내용은 필수입니다"))]
    pub content: String,

    pub user_id: i64,

    pub post_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsRequest {
    pub post_id: i64,
}
