//! Detail Modal
//!
//! Read-only view of the selected task's full text.

use leptos::prelude::*;

use crate::context::use_todos;

#[component]
pub fn DetailModal() -> impl IntoView {
    let ctx = use_todos();

    let full_text = move || ctx.with(|list| list.selected_task().map(|t| t.text.clone()));

    view! {
        <Show when=move || full_text().is_some()>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2 class="modal-title">"Detail"</h2>
                    <p class="detail-text">{move || full_text().unwrap_or_default()}</p>
                    <button class="modal-btn danger" on:click=move |_| ctx.update(|list| list.close_detail())>
                        "❌ Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
