//! New Todo Form Component
//!
//! Multi-line input with an Add button.

use leptos::prelude::*;

use crate::components::textarea_value;
use crate::context::use_todos;

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todos();

    let add_todo = move |_| {
        ctx.update(|list| {
            if let Some(id) = list.add() {
                log::info!(target: "TODOS", "task {} created, {} total", id, list.tasks().len());
            }
        });
    };

    view! {
        <div class="new-todo-form">
            <textarea
                class="new-todo-input"
                placeholder="Add thing to do..."
                prop:value=move || ctx.with(|list| list.input().to_string())
                on:input=move |ev| {
                    if let Some(text) = textarea_value(&ev) {
                        ctx.update(|list| list.set_input(text));
                    }
                }
            />
            <button class="add-btn" on:click=add_todo>
                "➕ Add"
            </button>
        </div>
    }
}
