//! Todo Card Component
//!
//! One task in the grid: preview text, completion toggle, edit and delete.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::display::preview;
use crate::models::Task;

#[component]
pub fn TodoCard(task: Task) -> impl IntoView {
    let ctx = use_todos();

    let id = task.id;
    let preview_text = preview(&task.text, ctx.config().preview_chars).into_owned();
    let text = StoredValue::new(task.text);
    let toggle_class = if task.completed {
        "toggle-btn done"
    } else {
        "toggle-btn"
    };

    view! {
        <div class="todo-card">
            <div
                class="todo-text"
                on:click=move |_| ctx.update(|list| list.select_for_detail(id))
            >
                {preview_text}
            </div>

            <div class="todo-actions">
                <button class=toggle_class on:click=move |_| ctx.update(|list| list.toggle(id))>
                    "✅ Mark as Done"
                </button>
                <div class="todo-actions-right">
                    <button
                        class="edit-btn"
                        on:click=move |_| ctx.update(|list| list.start_edit(id, text.get_value()))
                    >
                        "✏️"
                    </button>
                    <button
                        class="delete-btn"
                        on:click=move |_| ctx.update(|list| list.request_delete(id))
                    >
                        "🗑️"
                    </button>
                </div>
            </div>
        </div>
    }
}
