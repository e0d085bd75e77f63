//! Application Context
//!
//! UI-only state shared via Leptos Context API. Persisted data lives in the store.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Task whose edit dialog is open - read
    pub editing_task: ReadSignal<Option<u32>>,
    /// Task whose edit dialog is open - write
    set_editing_task: WriteSignal<Option<u32>>,
    /// Whether the drawing popup is shown - read
    pub pad_open: ReadSignal<bool>,
    /// Whether the drawing popup is shown - write
    set_pad_open: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        editing_task: (ReadSignal<Option<u32>>, WriteSignal<Option<u32>>),
        pad_open: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            editing_task: editing_task.0,
            set_editing_task: editing_task.1,
            pad_open: pad_open.0,
            set_pad_open: pad_open.1,
        }
    }

    /// Open the edit dialog for a task
    pub fn start_editing(&self, task_id: u32) {
        self.set_editing_task.set(Some(task_id));
    }

    /// Close the edit dialog
    pub fn stop_editing(&self) {
        self.set_editing_task.set(None);
    }

    pub fn set_pad_open(&self, open: bool) {
        self.set_pad_open.set(open);
    }
}
