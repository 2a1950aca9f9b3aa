use serde::{Deserialize, Serialize};

/// A single video-backed unit within a course.
///
/// Lessons are managed by the admin area and are read-only to the watch
/// flow, which resolves the "current" lesson from the list fetched once per
/// course view. The video reference comes in one of two forms:
///
/// - `video_url`: a directly playable URL (progressive or externally hosted),
/// - `video_key`: an asset key for server-side adaptive (HLS) delivery, in
///   which case the playable URL is the per-lesson playlist endpoint.
///
/// A lesson may carry neither while its upload is still transcoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u64,
    pub course_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordering field within the owning course; lists arrive sorted by it.
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub video_key: Option<String>,
    /// Free lessons are viewable without purchasing the course.
    #[serde(default)]
    pub is_free: bool,
}
