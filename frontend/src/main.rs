use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod logger;

fn main() {
    logger::init(config::log_level());
    yew::Renderer::<App>::new().render();
}
