//! Get Done Frontend Entry Point

mod models;
mod config;
mod storage;
mod clock;
mod persistence;
mod display;
mod task_list;
mod context;
mod logging;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
