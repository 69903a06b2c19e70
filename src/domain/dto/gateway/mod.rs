//! 게이트웨이 공개 요청 DTO
//!
//! 공개 API 본문에는 `user_id`가 없습니다. 작성자 신원은 항상
//! Bearer 토큰 검증 결과에서 채워집니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::dto::blog::{CreateCommentRequest, CreatePostRequest, ListPostsRequest, UpdatePostRequest};
use crate::utils::string_utils::{deserialize_optional_string, validate_not_blank};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostBody {
    #[validate(custom(function = "validate_not_blank", message = "제목은 필수입니다"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank", message = "내용은 필수입니다"))]
    pub content: String,
}

impl CreatePostBody {
    pub fn into_request(self, user_id: i64) -> CreatePostRequest {
        CreatePostRequest {
            title: self.title,
            content: self.content,
            user_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostBody {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
}

impl UpdatePostBody {
    pub fn into_request(self, id: i64, user_id: i64) -> UpdatePostRequest {
        UpdatePostRequest {
            id,
            user_id,
            title: self.title,
            content: self.content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentBody {
    #[validate(custom(function = "validate_not_blank", message = "댓글 내용은 필수입니다"))]
    pub content: String,

    pub post_id: i64,
}

impl CreateCommentBody {
    pub fn into_request(self, user_id: i64) -> CreateCommentRequest {
        CreateCommentRequest {
            content: self.content,
            user_id,
            post_id: self.post_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl From<ListPostsQuery> for ListPostsRequest {
    fn from(query: ListPostsQuery) -> Self {
        Self {
            page: query.page.unwrap_or(1),
            size: query.size.unwrap_or(0),
        }
    }
}
