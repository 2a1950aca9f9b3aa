//! Video playback surface.
//!
//! A pure projection of the resolved lesson: it owns no fetch logic and
//! decides nothing about which video to play. Player-reported errors are
//! shown as an overlay without discarding the `<video>` element underneath;
//! load errors diagnosed by the controller's preflight arrive through props
//! and render the same way. A source change clears the local overlay.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VideoPlayerProps {
    /// Playable URL of the current lesson, `None` when it has no video.
    #[prop_or_default]
    pub source: Option<String>,
    /// Controller-diagnosed load failure, distinct from playback errors.
    #[prop_or_default]
    pub load_error: Option<String>,
    #[prop_or_default]
    pub title: String,
}

pub enum Msg {
    PlaybackFailed,
}

pub struct VideoPlayer {
    playback_error: Option<String>,
}

impl Component for VideoPlayer {
    type Message = Msg;
    type Properties = VideoPlayerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        VideoPlayer {
            playback_error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PlaybackFailed => {
                self.playback_error = Some("Video playback failed.".to_string());
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.source != ctx.props().source {
            self.playback_error = None;
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let Some(source) = &props.source else {
            return html! {
                <div class="player-placeholder">
                    <p>{"This lesson's video is not available yet."}</p>
                </div>
            };
        };

        // Load errors outrank playback errors; both render identically.
        let overlay = props.load_error.as_ref().or(self.playback_error.as_ref());
        let onerror = ctx.link().callback(|_: Event| Msg::PlaybackFailed);
        html! {
            <div class="player-frame">
                <video
                    class="player-video"
                    src={source.clone()}
                    title={props.title.clone()}
                    controls=true
                    controlslist="nodownload"
                    {onerror}
                />
                {
                    match overlay {
                        Some(message) => html! {
                            <div class="player-overlay">
                                <p>{ message.clone() }</p>
                            </div>
                        },
                        None => Html::default(),
                    }
                }
            </div>
        }
    }
}
