//! UI Components
//!
//! Page shell and the task list widgets.

use wasm_bindgen::JsCast;

mod header;
mod footer;
mod todo_list;
mod todo_card;
mod new_todo_form;
mod detail_modal;
mod edit_modal;
mod delete_confirm_modal;

pub use header::Header;
pub use footer::Footer;
pub use todo_list::TodoList;
pub use todo_card::TodoCard;
pub use new_todo_form::NewTodoForm;
pub use detail_modal::DetailModal;
pub use edit_modal::EditModal;
pub use delete_confirm_modal::DeleteConfirmModal;

/// Current value of the textarea that fired an input event
pub(crate) fn textarea_value<E: JsCast>(ev: &E) -> Option<String> {
    let target = ev.unchecked_ref::<web_sys::Event>().target()?;
    target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .map(|el| el.value())
}
