//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Every mutating helper rewrites the affected collection to local storage.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::Result;
use crate::gallery::Gallery;
use crate::models::DrawingRecord;
use crate::storage::LocalStorage;
use crate::tasks::TaskList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// To-do entries, in display order
    pub tasks: TaskList,
    /// Submitted drawings, in display order
    pub gallery: Gallery,
}

impl AppState {
    /// Read both collections from local storage
    pub fn load() -> Self {
        let state = Self {
            tasks: TaskList::load_from(&LocalStorage),
            gallery: Gallery::load_from(&LocalStorage),
        };
        log::info!(
            "Loaded {} tasks and {} drawings",
            state.tasks.len(),
            state.gallery.len()
        );
        state
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Task Helpers
// ========================
//
// The model methods persist through `LocalStorage`; a failed write is logged
// and the in-memory change stays.

fn log_save_error<T>(what: &str, result: Result<T>, fallback: T) -> T {
    result.unwrap_or_else(|e| {
        log::error!("Saving {} failed: {}", what, e);
        fallback
    })
}

/// Add a task from the input box; blank input is ignored
pub fn store_add_task(store: &AppStore, input: &str) -> bool {
    let result = store.tasks().write().submit_and_save(&LocalStorage, input);
    let added = !input.trim().is_empty();
    if let Some(id) = log_save_error("tasks", result, None) {
        log::info!("Added task #{}", id);
    }
    added
}

pub fn store_set_completed(store: &AppStore, task_id: u32, completed: bool) {
    let result = store.tasks().write().set_completed_and_save(&LocalStorage, task_id, completed);
    log_save_error("tasks", result, true);
}

/// Replace a task's text; returns false when the input is blank
pub fn store_edit_task(store: &AppStore, task_id: u32, value: &str) -> bool {
    let result = store.tasks().write().edit_and_save(&LocalStorage, task_id, value);
    log_save_error("tasks", result, true)
}

pub fn store_delete_task(store: &AppStore, task_id: u32) {
    let result = store.tasks().write().remove_and_save(&LocalStorage, task_id);
    if log_save_error("tasks", result, true) {
        log::info!("Deleted task #{}", task_id);
    }
}

// ========================
// Drawing Helpers
// ========================

/// Validate a canvas export, persist it and add it to the gallery.
/// Nothing is added when the write fails.
pub fn store_submit_drawing(store: &AppStore, data_uri: String) -> Result<()> {
    let record = DrawingRecord::from_data_uri(data_uri)?;
    let id = store.gallery().write().submit_and_save(&LocalStorage, record)?;
    log::info!("Submitted drawing #{}", id);
    Ok(())
}

/// Remove every drawing with this URL and persist
pub fn store_delete_drawing(store: &AppStore, url: &str) {
    let result = store.gallery().write().remove_url_and_save(&LocalStorage, url);
    let removed = log_save_error("drawings", result, 0);
    if removed > 0 {
        log::info!("Deleted {} drawing(s)", removed);
    }
}
