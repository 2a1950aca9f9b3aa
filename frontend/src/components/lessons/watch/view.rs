//! View rendering for the watch page.
//!
//! Three screens: a centered status while loading or on error, and the
//! ready layout with header, lesson sidebar, player, and comment thread.
//! The player and sidebar are pure projections; everything they show comes
//! from the controller's state.

use yew::prelude::*;

use crate::components::comments::CommentThread;
use crate::components::lessons::player::VideoPlayer;
use crate::components::lessons::sidebar::LessonSidebar;
use crate::routing;

use super::helpers::resolve_video_source;
use super::messages::Msg;
use super::state::{Phase, WatchCoursePage};

pub fn view(component: &WatchCoursePage, ctx: &Context<WatchCoursePage>) -> Html {
    match &component.phase {
        Phase::Loading => status_screen("Loading lessons...", false),
        Phase::Error(message) => status_screen(message, true),
        Phase::Ready => view_ready(component, ctx),
    }
}

fn status_screen(message: &str, is_error: bool) -> Html {
    let class = if is_error {
        "watch-status watch-status-error"
    } else {
        "watch-status"
    };
    html! {
        <div class="watch-screen">
            <p class={class}>{ message.to_string() }</p>
        </div>
    }
}

fn view_ready(component: &WatchCoursePage, ctx: &Context<WatchCoursePage>) -> Html {
    let current = component.current_lesson();
    let source = current
        .and_then(|lesson| resolve_video_source(lesson, &component.config.api_base))
        .map(|s| s.url().to_string());
    let title = current.map(|lesson| lesson.title.clone()).unwrap_or_default();

    html! {
        <div class="watch-page">
            { view_header(component, ctx) }
            <div class="watch-body">
                <LessonSidebar
                    lessons={component.lessons.clone()}
                    current_lesson_id={component.current_lesson_id}
                    on_select={ctx.link().callback(Msg::SelectLesson)}
                />
                <div class="watch-main">
                    <VideoPlayer
                        {source}
                        load_error={component.video_load_error.clone()}
                        {title}
                    />
                    {
                        match component.current_lesson_id {
                            Some(lesson_id) => html! { <CommentThread {lesson_id} /> },
                            None => Html::default(),
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn view_header(component: &WatchCoursePage, ctx: &Context<WatchCoursePage>) -> Html {
    let onclick = Callback::from(|_: MouseEvent| routing::back());
    html! {
        <header class="watch-header">
            <button class="watch-back" {onclick} title="Back">{"\u{2190}"}</button>
            <div>
                <h1 class="watch-title">{ format!("Course #{}", ctx.props().course_id) }</h1>
                {
                    component
                        .current_lesson()
                        .map(|lesson| html! { <p class="watch-subtitle">{ lesson.title.clone() }</p> })
                        .unwrap_or_default()
                }
            </div>
        </header>
    }
}
