use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod context;
mod routing;

fn main() {
    yew::Renderer::<App>::new().render();
}
