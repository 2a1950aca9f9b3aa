use serde::{Deserialize, Serialize};

/// A viewer comment attached to a lesson.
///
/// Comments are created and deleted through the watch flow but never edited
/// in place. `created_at` is an opaque server-formatted timestamp used for
/// display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub lesson_id: u64,
    /// Display name of the author as resolved by the backend. May be absent
    /// for comments whose account has since been removed.
    #[serde(default)]
    pub author: Option<String>,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}
