//! Page Footer
//!
//! Copyright line with the year taken at render time.

use leptos::prelude::*;

use crate::context::current_year;

#[component]
pub fn Footer(#[prop(into)] app_name: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            {format!("© {} {}.", current_year(), app_name)}
        </footer>
    }
}
