//! Task List State Machine
//!
//! Owns the ordered task collection plus the transient selection state of
//! the page (add draft, detail view, edit dialog, delete confirmation).
//! Every change to the collection is written back through the gate.

use crate::clock::Clock;
use crate::display::is_blank;
use crate::models::{EditState, Task, TaskId};
use crate::persistence::PersistenceGate;
use crate::storage::KeyValueStore;

pub struct TaskList<S: KeyValueStore, C: Clock> {
    gate: PersistenceGate<S>,
    clock: C,
    tasks: Vec<Task>,
    input: String,
    // Independent modal flags: opening one does not close the others.
    selected: Option<TaskId>,
    editing: Option<EditState>,
    pending_delete: Option<TaskId>,
}

impl<S: KeyValueStore, C: Clock> TaskList<S, C> {
    /// Build the list and hydrate it from storage
    pub fn mount(gate: PersistenceGate<S>, clock: C) -> Self {
        let tasks = gate.hydrate(clock.now_millis());
        Self {
            gate,
            clock,
            tasks,
            input: String::new(),
            selected: None,
            editing: None,
            pending_delete: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn editing(&self) -> Option<&EditState> {
        self.editing.as_ref()
    }

    pub fn pending_delete(&self) -> Option<TaskId> {
        self.pending_delete
    }

    #[cfg(test)]
    pub fn selected(&self) -> Option<TaskId> {
        self.selected
    }

    /// Task shown in the detail view, if it still exists
    pub fn selected_task(&self) -> Option<&Task> {
        let id = self.selected?;
        self.tasks.iter().find(|t| t.id == id)
    }

    // ========================
    // Collection
    // ========================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Add the current input draft as a new task
    pub fn add(&mut self) -> Option<TaskId> {
        if is_blank(&self.input) {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        let id = self.clock.now_millis();
        self.tasks.push(Task::new(id, text));
        log::debug!(target: "TODOS", "added task {}", id);
        self.persist();
        Some(id)
    }

    #[cfg(test)]
    pub fn add_text(&mut self, text: impl Into<String>) -> Option<TaskId> {
        self.set_input(text);
        self.add()
    }

    pub fn toggle(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.completed = !task.completed;
        self.persist();
    }

    // ========================
    // Edit dialog
    // ========================

    /// Open the edit dialog; an unsaved previous draft is dropped
    pub fn start_edit(&mut self, id: TaskId, current_text: impl Into<String>) {
        self.editing = Some(EditState {
            id,
            draft: current_text.into(),
        });
    }

    pub fn set_edit_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.draft = text.into();
        }
    }

    /// Apply the draft. A blank draft leaves the dialog open and changes nothing.
    pub fn save_edit(&mut self) {
        let Some(edit) = self.editing.as_ref() else {
            return;
        };
        if is_blank(&edit.draft) {
            return;
        }
        let Some(edit) = self.editing.take() else {
            return;
        };
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == edit.id) {
            task.text = edit.draft;
        }
        self.persist();
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // ========================
    // Delete confirmation
    // ========================

    pub fn request_delete(&mut self, id: TaskId) {
        self.pending_delete = Some(id);
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        self.tasks.retain(|t| t.id != id);
        log::debug!(target: "TODOS", "deleted task {}", id);
        self.persist();
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    // ========================
    // Detail view
    // ========================

    pub fn select_for_detail(&mut self, id: TaskId) {
        self.selected = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    fn persist(&self) {
        if let Err(e) = self.gate.save(&self.tasks, self.clock.now_millis()) {
            log::warn!(target: "TODOS", "failed to save {} tasks: {}", self.tasks.len(), e);
        }
    }
}
