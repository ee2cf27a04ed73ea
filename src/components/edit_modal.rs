//! Edit Modal
//!
//! Textarea pre-filled with the task text. Save ignores a blank draft.

use leptos::prelude::*;

use crate::components::textarea_value;
use crate::context::use_todos;

#[component]
pub fn EditModal() -> impl IntoView {
    let ctx = use_todos();

    let is_editing = move || ctx.with(|list| list.editing().is_some());
    let draft = move || ctx.with(|list| list.editing().map(|e| e.draft.clone()).unwrap_or_default());

    view! {
        <Show when=is_editing>
            <div class="modal-backdrop">
                <div class="modal wide">
                    <h2 class="modal-title">"Edit"</h2>
                    <textarea
                        class="edit-input"
                        prop:value=draft
                        on:input=move |ev| {
                            if let Some(text) = textarea_value(&ev) {
                                ctx.update(|list| list.set_edit_draft(text));
                            }
                        }
                    />
                    <div class="modal-actions spread">
                        <button class="modal-btn success" on:click=move |_| ctx.update(|list| list.save_edit())>
                            "💾 Save"
                        </button>
                        <button class="modal-btn danger" on:click=move |_| ctx.update(|list| list.cancel_edit())>
                            "❌ Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
