//! Delete Confirm Modal
//!
//! Deletion only happens after "Yes" here; the card's trash button just
//! opens this dialog.

use leptos::prelude::*;

use crate::context::use_todos;

#[component]
pub fn DeleteConfirmModal() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <Show when=move || ctx.with(|list| list.pending_delete().is_some())>
            <div class="modal-backdrop">
                <div class="modal">
                    <h2 class="modal-title">"Delete Confirmation"</h2>
                    <p class="modal-message">"Do you want to delete this list?"</p>
                    <div class="modal-actions end">
                        <button class="modal-btn danger" on:click=move |_| ctx.update(|list| list.confirm_delete())>
                            "Yes"
                        </button>
                        <button class="modal-btn neutral" on:click=move |_| ctx.update(|list| list.cancel_delete())>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
