//! Page Header

use leptos::prelude::*;

#[component]
pub fn Header(#[prop(into)] app_name: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header-inner">
                <div class="brand">
                    "📝" <span class="brand-name">{app_name}</span>
                </div>
            </div>
        </header>
    }
}
