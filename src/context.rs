//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::persistence::PersistenceGate;
use crate::storage::BrowserStorage;
use crate::task_list::TaskList;

/// Task list wired to the browser
pub type BrowserTaskList = TaskList<BrowserStorage, SystemClock>;

/// Handle to the page's task list, shared by the list, cards and dialogs
#[derive(Clone, Copy)]
pub struct TodoContext {
    list: RwSignal<BrowserTaskList, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl TodoContext {
    /// Hydrate the list from `localStorage` (or memory when unavailable)
    pub fn mount(config: AppConfig) -> Self {
        let gate = PersistenceGate::new(BrowserStorage::detect(), &config);
        let list = TaskList::mount(gate, SystemClock);
        log::info!(target: "APP", "mounted with {} tasks", list.tasks().len());
        Self {
            list: RwSignal::new_local(list),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Read from the list, tracking it reactively
    pub fn with<T>(&self, f: impl FnOnce(&BrowserTaskList) -> T) -> T {
        self.list.with(f)
    }

    /// Mutate the list and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut BrowserTaskList)) {
        self.list.update(f);
    }
}

pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}

/// Current year for the footer
pub fn current_year() -> i32 {
    SystemClock.current_year()
}
