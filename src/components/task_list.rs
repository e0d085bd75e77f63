//! Task List Component
//!
//! Renders the task model and the empty-state placeholder.

use leptos::prelude::*;

use super::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    // Rows are keyed on their content so edits and toggles re-render the row
    let tasks = move || store.tasks().read().tasks().to_vec();
    let show_placeholder = move || store.tasks().read().show_placeholder();

    view! {
        <ul class="task-list">
            <For
                each=tasks
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
        <p class="empty-message" style:display=move || if show_placeholder() { "block" } else { "none" }>
            "No tasks yet. Add one above!"
        </p>
    }
}
