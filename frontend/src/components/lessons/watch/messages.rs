use common::model::lesson::Lesson;

use crate::context::AuthCtx;

/// Messages of the watch page controller.
///
/// Fetch completions carry the generation counter (`epoch`) of the load
/// that produced them; `update` drops anything stale, so a superseded
/// in-flight request can never overwrite newer state.
pub enum Msg {
    LessonsLoaded { epoch: u64, lessons: Vec<Lesson> },
    LessonsFailed { epoch: u64, message: String },
    /// Sidebar selection. Adopts the lesson and pushes the new URL.
    SelectLesson(u64),
    /// Playback preflight confirmed the adaptive stream is servable.
    PreflightPassed { epoch: u64 },
    /// Playback preflight failed; shown as a video load error, distinct
    /// from player-reported playback errors.
    PreflightFailed { epoch: u64, message: String },
    /// The auth collaborator handed over a different session.
    AuthChanged(AuthCtx),
}
