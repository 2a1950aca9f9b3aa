//! Composition root.
//!
//! `App` resolves the immutable configuration and the stored session once,
//! parses the current location, and mounts the matching page under the two
//! context providers. There is no client-side route transition handling:
//! navigation between courses goes through full URL changes, and the watch
//! page handles lesson switches internally.

use yew::prelude::*;

use crate::components::admin::video_status::VideoStatusPanel;
use crate::components::lessons::watch::WatchCoursePage;
use crate::config::AppConfig;
use crate::context::AuthCtx;
use crate::routing::{self, Route};

pub struct App {
    route: Route,
    config: AppConfig,
    auth: AuthCtx,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App {
            route: routing::current_route(),
            config: AppConfig::resolve(),
            auth: AuthCtx::from_storage(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let body = match &self.route {
            Route::Watch {
                course_id,
                lesson_id,
            } => html! {
                <WatchCoursePage course_id={course_id.clone()} lesson_id={lesson_id.clone()} />
            },
            Route::AdminVideoStatus { lesson_id } => {
                match lesson_id.parse::<u64>().ok().filter(|id| *id != 0) {
                    Some(lesson_id) => html! {
                        <VideoStatusPanel
                            {lesson_id}
                            on_close={Callback::from(|_| routing::back())}
                        />
                    },
                    None => not_found(),
                }
            }
            Route::NotFound => not_found(),
        };
        html! {
            <ContextProvider<AppConfig> context={self.config.clone()}>
                <ContextProvider<AuthCtx> context={self.auth.clone()}>
                    { body }
                </ContextProvider<AuthCtx>>
            </ContextProvider<AppConfig>>
        }
    }
}

fn not_found() -> Html {
    html! {
        <div class="watch-screen">
            <p class="watch-status">{"Page not found."}</p>
        </div>
    }
}
