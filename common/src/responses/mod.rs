//! Response envelopes for the course platform REST API.
//!
//! The backend is inconsistent about nesting: some endpoints return a bare
//! payload, others wrap it as `{ "data": ... }`, and the comment endpoints
//! nest one level deeper (`data.comments` / `data.comment`). Each shape is
//! decoded exactly once, here, into an explicit type with an `into_*`
//! accessor, so no caller ever probes nested JSON by hand.

use serde::Deserialize;

use crate::model::comment::Comment;
use crate::model::lesson::Lesson;

/// Lesson list endpoint: either a bare array or `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum LessonListPayload {
    Plain(Vec<Lesson>),
    Wrapped { data: Vec<Lesson> },
}

impl LessonListPayload {
    pub fn into_lessons(self) -> Vec<Lesson> {
        match self {
            LessonListPayload::Plain(lessons) => lessons,
            LessonListPayload::Wrapped { data } => data,
        }
    }
}

/// Comment list endpoint: `{ "data": { "comments": [...] } }`.
///
/// A missing or null `data`/`comments` decodes to an empty list; "no
/// comments" is a display state, not an error.
#[derive(Debug, Deserialize)]
pub struct CommentListResponse {
    #[serde(default)]
    data: Option<CommentListData>,
}

#[derive(Debug, Default, Deserialize)]
struct CommentListData {
    #[serde(default)]
    comments: Vec<Comment>,
}

impl CommentListResponse {
    pub fn into_comments(self) -> Vec<Comment> {
        self.data.map(|d| d.comments).unwrap_or_default()
    }
}

/// Comment creation endpoint: `{ "data": { "comment": {...} } }`, with a
/// bare comment accepted as a fallback shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreatedCommentPayload {
    Wrapped { data: CreatedCommentData },
    Bare(Comment),
}

#[derive(Debug, Deserialize)]
pub struct CreatedCommentData {
    comment: Comment,
}

impl CreatedCommentPayload {
    pub fn into_comment(self) -> Comment {
        match self {
            CreatedCommentPayload::Wrapped { data } => data.comment,
            CreatedCommentPayload::Bare(comment) => comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_list_decodes_bare_array() {
        let json = r#"[{"id":1,"course_id":42,"title":"Intro"},
                       {"id":2,"course_id":42,"title":"Setup"}]"#;
        let payload: LessonListPayload = serde_json::from_str(json).unwrap();
        let lessons = payload.into_lessons();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].id, 1);
        assert_eq!(lessons[1].title, "Setup");
    }

    #[test]
    fn lesson_list_decodes_wrapped_data() {
        let json = r#"{"data":[{"id":7,"course_id":3,"title":"Only"}]}"#;
        let payload: LessonListPayload = serde_json::from_str(json).unwrap();
        let lessons = payload.into_lessons();
        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].id, 7);
        assert!(lessons[0].video_url.is_none());
    }

    #[test]
    fn comment_list_unwraps_nested_shape() {
        let json = r#"{"data":{"comments":[
            {"id":10,"lesson_id":1,"author":"dana","content":"nice","created_at":"2024-05-01"}
        ]}}"#;
        let resp: CommentListResponse = serde_json::from_str(json).unwrap();
        let comments = resp.into_comments();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].content, "nice");
    }

    #[test]
    fn comment_list_tolerates_missing_data() {
        let resp: CommentListResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.into_comments().is_empty());

        let resp: CommentListResponse =
            serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(resp.into_comments().is_empty());

        let resp: CommentListResponse =
            serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(resp.into_comments().is_empty());
    }

    #[test]
    fn created_comment_unwraps_envelope() {
        let json = r#"{"data":{"comment":{"id":5,"lesson_id":2,"content":"first"}}}"#;
        let payload: CreatedCommentPayload = serde_json::from_str(json).unwrap();
        let comment = payload.into_comment();
        assert_eq!(comment.id, 5);
        assert_eq!(comment.lesson_id, 2);
    }

    #[test]
    fn created_comment_accepts_bare_shape() {
        let json = r#"{"id":6,"lesson_id":2,"content":"second"}"#;
        let payload: CreatedCommentPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.into_comment().content, "second");
    }

    #[test]
    fn video_status_decodes_processing_payload() {
        use crate::model::video::{ProcessingState, VideoStatus};

        let json = r#"{"status":"processing","processing_progress":63,
                       "estimated_time_remaining":"2m",
                       "video_info":{"duration":"12:30","size":"512MB"}}"#;
        let status: VideoStatus = serde_json::from_str(json).unwrap();
        assert_eq!(status.status, ProcessingState::Processing);
        assert_eq!(status.processing_progress, Some(63));
        assert_eq!(status.video_info.unwrap().duration.as_deref(), Some("12:30"));

        let status: VideoStatus =
            serde_json::from_str(r#"{"status":"archived"}"#).unwrap();
        assert_eq!(status.status, ProcessingState::Unknown);
    }
}
