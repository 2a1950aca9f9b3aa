use common::model::lesson::Lesson;
use common::responses::LessonListPayload;

use super::{get_json, ApiError};

/// Fetches the ordered lesson list for a course.
///
/// The endpoint historically returned either a bare array or a `data`
/// wrapper; both decode through [`LessonListPayload`].
pub async fn get_lessons_by_course(
    base: &str,
    course_id: u64,
    token: Option<&str>,
) -> Result<Vec<Lesson>, ApiError> {
    if course_id == 0 {
        return Err(ApiError::Validation("courseId is required".into()));
    }
    let url = format!("{}/courses/{}/lessons", base, course_id);
    let payload: LessonListPayload = get_json(&url, token, "Lesson list fetch").await?;
    Ok(payload.into_lessons())
}
