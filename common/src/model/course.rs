use serde::{Deserialize, Serialize};

/// A purchasable collection of ordered lessons.
///
/// Courses are created and edited through the admin area; the watch flow
/// only ever reads them, so no mutating request types exist for this model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in the platform's display currency. `None` for free courses.
    #[serde(default)]
    pub price: Option<f64>,
}
