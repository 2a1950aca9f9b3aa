//! State of the watch page controller.

use common::model::lesson::Lesson;
use yew::context::ContextHandle;

use crate::config::AppConfig;
use crate::context::AuthCtx;

/// Lifecycle of a lesson-list load.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Ready,
    Error(String),
}

pub struct WatchCoursePage {
    pub phase: Phase,

    /// Last successfully fetched lesson list for the active course.
    pub lessons: Vec<Lesson>,

    /// Id of the lesson selected for playback. The rendered lesson is
    /// always looked up by id in `lessons`, so a stale or foreign id simply
    /// resolves to nothing instead of showing data from another course.
    pub current_lesson_id: Option<u64>,

    /// Failure of the playback preflight. Kept separate from player-reported
    /// errors, which the player surface owns.
    pub video_load_error: Option<String>,

    /// Generation counter. Bumped by every load and lesson selection;
    /// completions carrying an older value are dropped.
    pub epoch: u64,

    pub auth: AuthCtx,
    pub config: AppConfig,

    /// Keeps the auth context subscription alive; dropping it would stop
    /// `Msg::AuthChanged` deliveries.
    pub _auth_handle: Option<ContextHandle<AuthCtx>>,
}

impl WatchCoursePage {
    pub fn new(auth: AuthCtx, auth_handle: Option<ContextHandle<AuthCtx>>, config: AppConfig) -> Self {
        Self {
            phase: Phase::Loading,
            lessons: Vec::new(),
            current_lesson_id: None,
            video_load_error: None,
            epoch: 0,
            auth,
            config,
            _auth_handle: auth_handle,
        }
    }

    /// The current lesson, by lookup in the last fetched list.
    pub fn current_lesson(&self) -> Option<&Lesson> {
        let id = self.current_lesson_id?;
        self.lessons.iter().find(|l| l.id == id)
    }
}
