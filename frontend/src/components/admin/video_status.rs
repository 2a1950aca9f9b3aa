//! Transcoding status panel for a lesson's uploaded video.
//!
//! Fetches the status once on mount, then polls on a fixed interval while
//! mounted. The interval is an owned `gloo_timers::callback::Interval`
//! dropped in `destroy`, so no tick (and therefore no state write) can
//! happen after the panel is torn down. Completions are generation-guarded
//! like every other fetch in this app.

use common::model::video::{ProcessingState, VideoStatus};
use gloo_timers::callback::Interval;
use yew::context::ContextHandle;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::config::{AppConfig, DEFAULT_API_BASE};
use crate::context::AuthCtx;

const POLL_INTERVAL_MS: u32 = 5_000;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoStatusProps {
    pub lesson_id: u64,
    #[prop_or_default]
    pub lesson_title: String,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

pub enum Msg {
    Poll,
    Loaded { epoch: u64, status: VideoStatus },
    Failed { epoch: u64, message: String },
    AuthChanged(AuthCtx),
}

pub struct VideoStatusPanel {
    status: Option<VideoStatus>,
    loading: bool,
    error: Option<String>,
    epoch: u64,
    poll: Option<Interval>,
    auth: AuthCtx,
    config: AppConfig,
    _auth_handle: Option<ContextHandle<AuthCtx>>,
}

impl Component for VideoStatusPanel {
    type Message = Msg;
    type Properties = VideoStatusProps;

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

        let link = ctx.link().clone();
        let poll = Interval::new(POLL_INTERVAL_MS, move || link.send_message(Msg::Poll));

        let mut panel = VideoStatusPanel {
            status: None,
            loading: true,
            error: None,
            epoch: 0,
            poll: Some(poll),
            auth: auth.unwrap_or_default(),
            config,
            _auth_handle: auth_handle,
        };
        panel.fetch_status(ctx);
        panel
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Poll => {
                self.fetch_status(ctx);
                false
            }
            Msg::Loaded { epoch, status } => {
                if epoch != self.epoch {
                    return false;
                }
                self.loading = false;
                self.error = None;
                self.status = Some(status);
                true
            }
            Msg::Failed { epoch, message } => {
                if epoch != self.epoch {
                    return false;
                }
                self.loading = false;
                self.error = Some(message);
                true
            }
            Msg::AuthChanged(auth) => {
                self.auth = auth;
                self.fetch_status(ctx);
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.lesson_id != ctx.props().lesson_id {
            self.status = None;
            self.loading = true;
            self.error = None;
            self.fetch_status(ctx);
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the interval cancels the underlying timer.
        self.poll = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_: MouseEvent| ());
        let on_refresh = ctx.link().callback(|_: MouseEvent| Msg::Poll);
        html! {
            <div class="status-panel">
                <div class="status-header">
                    <h2 class="status-title">{"Video processing status"}</h2>
                    <button class="status-close" onclick={on_close} title="Close">
                        {"\u{2715}"}
                    </button>
                </div>
                <h3 class="status-lesson">{ props.lesson_title.clone() }</h3>
                { self.view_body() }
                <div class="status-actions">
                    <button class="status-refresh" onclick={on_refresh}>{"Refresh"}</button>
                </div>
            </div>
        }
    }
}

impl VideoStatusPanel {
    fn fetch_status(&mut self, ctx: &Context<Self>) {
        self.epoch += 1;
        let epoch = self.epoch;
        let lesson_id = ctx.props().lesson_id;
        let base = self.config.api_base.clone();
        let token = self.auth.token.clone();
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::video::get_video_status(&base, lesson_id, token.as_deref()).await {
                Ok(status) => link.send_message(Msg::Loaded { epoch, status }),
                Err(err) => {
                    gloo_console::error!(format!("video status fetch failed: {}", err));
                    link.send_message(Msg::Failed {
                        epoch,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn view_body(&self) -> Html {
        if self.loading && self.status.is_none() {
            return html! { <p class="status-note">{"Checking status..."}</p> };
        }
        if let Some(error) = &self.error {
            return html! { <p class="status-note status-error">{ error.clone() }</p> };
        }
        let Some(status) = &self.status else {
            return Html::default();
        };
        html! {
            <div class="status-body">
                <p class={badge_class(status.status)}>{ badge_text(status.status) }</p>
                { view_progress(status) }
                { view_info(status) }
                { view_renditions(status) }
            </div>
        }
    }
}

fn badge_text(state: ProcessingState) -> &'static str {
    match state {
        ProcessingState::Ready => "Video is ready to watch",
        ProcessingState::Processing => "Transcoding in progress...",
        ProcessingState::Failed => "Video processing failed",
        ProcessingState::Unknown => "No video uploaded",
    }
}

fn badge_class(state: ProcessingState) -> &'static str {
    match state {
        ProcessingState::Ready => "status-badge status-ready",
        ProcessingState::Processing => "status-badge status-processing",
        ProcessingState::Failed => "status-badge status-failed",
        ProcessingState::Unknown => "status-badge",
    }
}

fn view_progress(status: &VideoStatus) -> Html {
    if status.status != ProcessingState::Processing {
        return Html::default();
    }
    let percent = status.processing_progress.unwrap_or(0);
    html! {
        <div class="status-progress">
            <div class="status-progress-track">
                <div
                    class="status-progress-bar"
                    style={format!("width: {}%", percent.min(100))}
                />
            </div>
            <span class="status-progress-label">{ format!("{}%", percent) }</span>
            {
                match &status.estimated_time_remaining {
                    Some(eta) => html! {
                        <span class="status-eta">{ format!("about {} remaining", eta) }</span>
                    },
                    None => Html::default(),
                }
            }
        </div>
    }
}

fn view_info(status: &VideoStatus) -> Html {
    let Some(info) = &status.video_info else {
        return Html::default();
    };
    let row = |label: &str, value: &Option<String>| match value {
        Some(value) => html! {
            <div class="status-info-row">
                <span class="status-info-label">{ label.to_string() }</span>
                <span class="status-info-value">{ value.clone() }</span>
            </div>
        },
        None => Html::default(),
    };
    html! {
        <div class="status-info">
            { row("Duration", &info.duration) }
            { row("Size", &info.size) }
            { row("Uploaded", &info.uploaded_at) }
        </div>
    }
}

fn view_renditions(status: &VideoStatus) -> Html {
    if status.status != ProcessingState::Ready || status.renditions.is_empty() {
        return Html::default();
    }
    html! {
        <div class="status-renditions">
            {
                for status.renditions.iter().map(|name| html! {
                    <span key={name.clone()} class="status-rendition">{ name.clone() }</span>
                })
            }
        </div>
    }
}
