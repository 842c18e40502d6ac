mod components;
mod config;
mod error;
mod game;
mod logger;

fn main() {
    logger::init(config::LOG_LEVEL);
    yew::start_app::<components::app::App>();
}
