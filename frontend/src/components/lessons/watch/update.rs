//! Update logic of the watch page controller.
//!
//! Every fetch completion is stamped with the generation counter it was
//! spawned under; anything older than `component.epoch` is dropped on the
//! floor. Lesson selection bumps the counter too, so a preflight started
//! for a previous lesson can never mark the newly selected one as broken.

use yew::prelude::*;

use crate::routing;

use super::helpers::{parse_id, resolve_current, Resolution};
use super::messages::Msg;
use super::state::{Phase, WatchCoursePage};
use super::{start_load, start_preflight};

pub fn update(
    component: &mut WatchCoursePage,
    ctx: &Context<WatchCoursePage>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::LessonsLoaded { epoch, lessons } => {
            if epoch != component.epoch {
                return false;
            }
            component.lessons = lessons;
            let route_lesson_id = ctx.props().lesson_id.as_deref().and_then(parse_id);
            match resolve_current(&component.lessons, route_lesson_id) {
                Resolution::Current {
                    lesson_id,
                    replace_url,
                } => {
                    component.current_lesson_id = Some(lesson_id);
                    component.phase = Phase::Ready;
                    if replace_url {
                        if let Some(course_id) = parse_id(&ctx.props().course_id) {
                            routing::replace_url(&routing::watch_path(course_id, lesson_id));
                        }
                    }
                    start_preflight(component, ctx);
                }
                Resolution::NoLessons => {
                    component.phase =
                        Phase::Error("No lessons available for this course yet.".to_string());
                }
            }
            true
        }
        Msg::LessonsFailed { epoch, message } => {
            if epoch != component.epoch {
                return false;
            }
            component.phase = Phase::Error(message);
            true
        }
        Msg::SelectLesson(lesson_id) => {
            if component.current_lesson_id == Some(lesson_id)
                || !component.lessons.iter().any(|l| l.id == lesson_id)
            {
                return false;
            }
            component.epoch += 1;
            component.current_lesson_id = Some(lesson_id);
            component.video_load_error = None;
            if let Some(course_id) = parse_id(&ctx.props().course_id) {
                routing::push_url(&routing::watch_path(course_id, lesson_id));
            }
            start_preflight(component, ctx);
            true
        }
        Msg::PreflightPassed { epoch } => {
            if epoch != component.epoch {
                return false;
            }
            // Nothing to show; the player is already bound to the source.
            false
        }
        Msg::PreflightFailed { epoch, message } => {
            if epoch != component.epoch {
                return false;
            }
            component.video_load_error = Some(message);
            true
        }
        Msg::AuthChanged(auth) => {
            component.auth = auth;
            start_load(component, ctx);
            true
        }
    }
}
