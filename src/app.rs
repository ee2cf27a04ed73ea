//! Get Done App
//!
//! Page layout: header, task list, footer.

use leptos::prelude::*;

use crate::components::{Footer, Header, TodoList};
use crate::config::AppConfig;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let app_name = config.app_name.clone();

    view! {
        <div class="app-layout">
            <Header app_name=app_name.clone() />
            <TodoList config=config />
            <Footer app_name=app_name />
        </div>
    }
}
