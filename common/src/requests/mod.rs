use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request payload for the comment creation endpoint.
/// Field names match the backend contract (`lesson_id`, not `lessonId`).
pub struct CreateCommentRequest {
    pub lesson_id: u64,
    pub content: String,
}
