use yew::prelude::*;

/// Properties for the watch page, carrying the raw route segments.
///
/// Both ids arrive as strings exactly as they appeared in the path; the
/// controller decides whether they are usable. Passing them raw keeps the
/// "empty course id goes straight to the error state" rule in one place
/// instead of scattering parse fallbacks over the routing layer.
#[derive(Properties, PartialEq, Clone)]
pub struct WatchCourseProps {
    /// Course id route segment. Required; an unusable value short-circuits
    /// to the error state without a network call.
    pub course_id: String,

    /// Lesson id route segment when the viewer deep-linked a lesson.
    /// `None` means "resolve to the first lesson and canonicalize the URL".
    #[prop_or_default]
    pub lesson_id: Option<String>,
}
