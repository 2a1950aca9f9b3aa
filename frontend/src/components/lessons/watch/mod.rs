//! Watch page: the lesson resolution controller.
//!
//! On mount (and again whenever the course id, route lesson id, or session
//! token changes) the controller fetches the course's lesson list, resolves
//! the current lesson (route-supplied id, else first lesson with a silent
//! URL replacement), and drives the player surface and comment thread from
//! the result. Adaptive lessons additionally get a playback preflight that
//! walks playlist -> key to confirm the stream is actually servable.
//!
//! All fetches run in `spawn_local` and report back as messages stamped
//! with the generation counter current at spawn time; `update` ignores
//! stale completions, so no superseded request can clobber newer state.

use yew::platform::spawn_local;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::WatchCourseProps;
pub use state::WatchCoursePage;

use state::Phase;

use crate::api;
use crate::api::ApiError;
use crate::config::{AppConfig, DEFAULT_API_BASE};
use crate::context::AuthCtx;

impl Component for WatchCoursePage {
    type Message = Msg;
    type Properties = WatchCourseProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (auth, auth_handle) = ctx
            .link()
            .context::<AuthCtx>(ctx.link().callback(Msg::AuthChanged))
            .unzip();
        let config = ctx
            .link()
            .context::<AppConfig>(Callback::noop())
            .map(|(config, _)| config)
            .unwrap_or_else(|| AppConfig {
                api_base: DEFAULT_API_BASE.to_string(),
            });
        let mut page = WatchCoursePage::new(auth.unwrap_or_default(), auth_handle, config);
        start_load(&mut page, ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        start_load(self, ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}

/// Begins a fresh lesson-list load for the props' course.
///
/// Resets the view state, bumps the generation counter, and spawns the
/// fetch. An unusable course id transitions straight to the error state
/// without issuing any request.
fn start_load(component: &mut WatchCoursePage, ctx: &Context<WatchCoursePage>) {
    component.epoch += 1;
    component.phase = Phase::Loading;
    component.lessons.clear();
    component.current_lesson_id = None;
    component.video_load_error = None;

    let Some(course_id) = helpers::parse_id(&ctx.props().course_id) else {
        component.phase = Phase::Error("Course not specified.".to_string());
        return;
    };

    let epoch = component.epoch;
    let base = component.config.api_base.clone();
    let token = component.auth.token.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::lessons::get_lessons_by_course(&base, course_id, token.as_deref()).await {
            Ok(lessons) => link.send_message(Msg::LessonsLoaded { epoch, lessons }),
            Err(err) => {
                gloo_console::error!(format!("lesson list fetch failed: {}", err));
                link.send_message(Msg::LessonsFailed {
                    epoch,
                    message: err.to_string(),
                });
            }
        }
    });
}

/// Spawns the playback preflight for the current lesson when it is served
/// adaptively. Direct-URL lessons play without one.
fn start_preflight(component: &WatchCoursePage, ctx: &Context<WatchCoursePage>) {
    let Some(lesson) = component.current_lesson() else {
        return;
    };
    let adaptive = matches!(
        helpers::resolve_video_source(lesson, &component.config.api_base),
        Some(helpers::VideoSource::Adaptive(_))
    );
    if !adaptive {
        return;
    }

    let lesson_id = lesson.id;
    let epoch = component.epoch;
    let base = component.config.api_base.clone();
    let token = component.auth.token.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        match preflight(&base, lesson_id, token.as_deref()).await {
            Ok(()) => link.send_message(Msg::PreflightPassed { epoch }),
            Err(err) => {
                gloo_console::error!(format!("playback preflight failed: {}", err));
                link.send_message(Msg::PreflightFailed {
                    epoch,
                    message: err.to_string(),
                });
            }
        }
    });
}

/// Fetches the playlist and, when it is key-protected, the decryption key.
/// An unencrypted playlist passes trivially.
async fn preflight(base: &str, lesson_id: u64, token: Option<&str>) -> Result<(), ApiError> {
    let playlist = api::video::get_playlist(base, lesson_id, token).await?;
    let Some(key_token) = api::video::extract_key_token(&playlist) else {
        return Ok(());
    };
    api::video::get_decryption_key(base, lesson_id, &key_token, token).await?;
    Ok(())
}
