//! Todo List Component
//!
//! Owns the task list for the page: hydrates it on mount and renders the
//! form, the card grid and the dialogs.

use leptos::prelude::*;

use crate::components::{DeleteConfirmModal, DetailModal, EditModal, NewTodoForm, TodoCard};
use crate::config::AppConfig;
use crate::context::TodoContext;

#[component]
pub fn TodoList(config: AppConfig) -> impl IntoView {
    let ctx = TodoContext::mount(config);
    provide_context(ctx);

    let tasks = move || ctx.with(|list| list.tasks().to_vec());

    view! {
        <main class="todo-page">
            <div class="todo-panel">
                <h1 class="todo-title">"📋 Get It Done!"</h1>

                <NewTodoForm />

                <div class="todo-grid">
                    <For
                        each=tasks
                        key=|task| (task.id, task.text.clone(), task.completed)
                        children=move |task| view! { <TodoCard task=task /> }
                    />
                </div>
            </div>

            <DetailModal />
            <EditModal />
            <DeleteConfirmModal />
        </main>
    }
}
