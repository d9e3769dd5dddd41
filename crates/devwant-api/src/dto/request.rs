//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use devwant_entity::category::CategoryOrder;
use devwant_entity::vote::VoteType;
use devwant_service::board::{CreateBoardRequest, UpdateBoardRequest};
use devwant_service::comment::CreateCommentRequest;
use devwant_service::post::{CreatePostRequest, UpdatePostRequest};

/// OAuth callback body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CallbackRequest {
    /// Authorization code returned by the provider.
    #[validate(length(min = 1, message = "인증 코드가 없습니다."))]
    pub code: String,
    /// State issued by `/authorize`.
    #[validate(length(min = 1, message = "인증 상태값이 없습니다."))]
    pub state: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token.
    #[validate(length(min = 1, message = "로그인이 필요합니다."))]
    pub refresh_token: String,
}

/// Optional logout body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoutRequest {
    /// Refresh token to revoke together with the access token.
    pub refresh_token: Option<String>,
}

/// Profile update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, message = "이름을 입력해주세요"))]
    pub name: String,
}

/// `GET /api/boards?category=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardListQuery {
    pub category: Option<String>,
}

/// New post or reply.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostBody {
    #[validate(length(min = 1, max = 300, message = "제목과 내용은 필수 입력사항입니다."))]
    pub title: String,
    #[validate(length(min = 1, message = "제목과 내용은 필수 입력사항입니다."))]
    pub content: String,
    /// Post being replied to.
    pub parent_id: Option<i64>,
}

impl From<CreatePostBody> for CreatePostRequest {
    fn from(body: CreatePostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
            parent_id: body.parent_id,
        }
    }
}

/// Post edit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostBody {
    #[validate(length(min = 1, max = 300, message = "제목과 내용은 필수 입력사항입니다."))]
    pub title: String,
    #[validate(length(min = 1, message = "제목과 내용은 필수 입력사항입니다."))]
    pub content: String,
}

impl From<UpdatePostBody> for UpdatePostRequest {
    fn from(body: UpdatePostBody) -> Self {
        Self {
            title: body.title,
            content: body.content,
        }
    }
}

/// Like or dislike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct VoteRequest {
    pub vote_type: VoteType,
}

/// New comment.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCommentBody {
    #[validate(length(min = 1, max = 5000, message = "댓글 내용을 입력해주세요."))]
    pub content: String,
    /// Comment being replied to.
    pub parent_id: Option<i64>,
    /// User mentioned in the reply.
    pub mentioned_user_id: Option<i64>,
}

impl From<CreateCommentBody> for CreateCommentRequest {
    fn from(body: CreateCommentBody) -> Self {
        Self {
            content: body.content,
            parent_id: body.parent_id,
            mentioned_user_id: body.mentioned_user_id,
        }
    }
}

/// New board (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBoardBody {
    #[validate(length(min = 2, max = 32, message = "게시판 코드는 2~32자의 영문 소문자, 숫자, -, _ 만 사용할 수 있습니다."))]
    pub code: String,
    #[validate(length(min = 1, max = 200, message = "게시판 이름을 입력해주세요."))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100, message = "게시판 분류를 입력해주세요."))]
    pub category: String,
}

impl From<CreateBoardBody> for CreateBoardRequest {
    fn from(body: CreateBoardBody) -> Self {
        Self {
            code: body.code,
            title: body.title,
            description: body.description,
            category: body.category,
        }
    }
}

/// Board edit (admin). Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBoardBody {
    pub code: Option<String>,
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 100))]
    pub category: Option<String>,
}

impl From<UpdateBoardBody> for UpdateBoardRequest {
    fn from(body: UpdateBoardBody) -> Self {
        Self {
            code: body.code,
            title: body.title,
            description: body.description,
            category: body.category,
        }
    }
}

/// `DELETE /api/admin/boards/{id}?permanent=`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DeleteBoardQuery {
    #[serde(default)]
    pub permanent: bool,
}

/// New category (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryBody {
    #[validate(length(min = 1, max = 100, message = "카테고리 이름이 필요합니다."))]
    pub name: String,
    pub description: Option<String>,
}

/// Category edit (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryBody {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Category reorder (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReorderCategoriesRequest {
    #[validate(length(min = 1, message = "올바르지 않은 데이터 형식입니다."))]
    pub categories: Vec<CategoryOrder>,
}

#[cfg(test)]
mod tests {
    use devwant_service::messages;

    use super::*;

    #[test]
    fn test_post_body_requires_title_and_content() {
        let body = CreatePostBody {
            title: String::new(),
            content: "본문".to_string(),
            parent_id: None,
        };
        let errors = body.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));

        let body = CreatePostBody {
            title: "제목".to_string(),
            content: "본문".to_string(),
            parent_id: Some(3),
        };
        assert!(body.validate().is_ok());
        assert_eq!(CreatePostRequest::from(body).parent_id, Some(3));
    }

    #[test]
    fn test_vote_type_parses_lowercase() {
        let req: VoteRequest = serde_json::from_str(r#"{"vote_type":"dislike"}"#).unwrap();
        assert_eq!(req.vote_type, VoteType::Dislike);
        assert!(serde_json::from_str::<VoteRequest>(r#"{"vote_type":"meh"}"#).is_err());
    }

    #[test]
    fn test_reorder_requires_entries() {
        let req: ReorderCategoriesRequest = serde_json::from_str(r#"{"categories":[]}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let message = errors.field_errors()["categories"][0].message.clone().unwrap();
        assert_eq!(message, messages::INVALID_REQUEST);
    }

    #[test]
    fn test_delete_board_query_defaults_to_soft() {
        let query: DeleteBoardQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.permanent);
    }
}
