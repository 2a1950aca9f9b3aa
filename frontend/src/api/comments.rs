//! Comment operations, scoped to a single lesson.

use common::model::comment::Comment;
use common::requests::CreateCommentRequest;
use common::responses::{CommentListResponse, CreatedCommentPayload};

use super::{delete, get_json, post_json, ApiError};

/// Lists the comments of a lesson. A response without a comment list is
/// treated as "no comments", not as an error.
pub async fn get_lesson_comments(
    base: &str,
    lesson_id: u64,
    token: Option<&str>,
) -> Result<Vec<Comment>, ApiError> {
    if lesson_id == 0 {
        return Err(ApiError::Validation("lessonId is required".into()));
    }
    let url = format!("{}/lessons/{}/comments", base, lesson_id);
    let resp: CommentListResponse = get_json(&url, token, "Comment list fetch").await?;
    Ok(resp.into_comments())
}

/// Synchronous argument check shared by [`create_comment`] and the thread
/// component's submit handler. Runs before any request is built.
pub fn validate_new_comment(req: &CreateCommentRequest) -> Result<(), ApiError> {
    if req.lesson_id == 0 || req.content.trim().is_empty() {
        return Err(ApiError::Validation(
            "lesson_id and content are required".into(),
        ));
    }
    Ok(())
}

/// Creates a comment and returns the server-side record, unwrapped from the
/// `data.comment` envelope.
pub async fn create_comment(
    base: &str,
    req: &CreateCommentRequest,
    token: Option<&str>,
) -> Result<Comment, ApiError> {
    validate_new_comment(req)?;
    let url = format!("{}/comments", base);
    let payload: CreatedCommentPayload = post_json(&url, req, token, "Comment creation").await?;
    Ok(payload.into_comment())
}

/// Deletes a comment by id.
pub async fn delete_comment(
    base: &str,
    comment_id: u64,
    token: Option<&str>,
) -> Result<(), ApiError> {
    if comment_id == 0 {
        return Err(ApiError::Validation("commentId is required".into()));
    }
    let url = format!("{}/comments/{}", base, comment_id);
    delete(&url, token, "Comment deletion").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_rejected_before_any_request() {
        let req = CreateCommentRequest {
            lesson_id: 1,
            content: "   ".into(),
        };
        assert!(matches!(
            validate_new_comment(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn missing_lesson_id_is_rejected_before_any_request() {
        let req = CreateCommentRequest {
            lesson_id: 0,
            content: "hello".into(),
        };
        assert!(matches!(
            validate_new_comment(&req),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn well_formed_comment_passes_validation() {
        let req = CreateCommentRequest {
            lesson_id: 3,
            content: "great lesson".into(),
        };
        assert!(validate_new_comment(&req).is_ok());
    }
}
