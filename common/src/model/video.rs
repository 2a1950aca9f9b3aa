use serde::{Deserialize, Serialize};

/// Server-side transcoding state of a lesson's uploaded video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingState {
    /// Renditions are generated and the playlist is servable.
    Ready,
    /// The transcoder is still working; `processing_progress` applies.
    Processing,
    /// Transcoding aborted; the lesson has no playable adaptive video.
    Failed,
    /// No upload exists, or the backend reported a state this client does
    /// not know about.
    #[serde(other)]
    Unknown,
}

/// Metadata about the uploaded source asset, reported alongside the status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoInfo {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

/// Payload of the admin video-status endpoint, polled while a lesson's
/// upload is transcoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoStatus {
    pub status: ProcessingState,
    /// Percentage completed, only meaningful while `Processing`.
    #[serde(default)]
    pub processing_progress: Option<u8>,
    #[serde(default)]
    pub estimated_time_remaining: Option<String>,
    #[serde(default)]
    pub video_info: Option<VideoInfo>,
    /// Rendition names available once the status is `Ready`.
    #[serde(default)]
    pub renditions: Vec<String>,
}
