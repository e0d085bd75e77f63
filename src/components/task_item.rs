//! Task Item Component
//!
//! One row of the task list: checkbox, text, timestamp, then edit and delete.

use leptos::prelude::*;

use crate::config::{DELETE_ICON, EDIT_ICON};
use crate::context::AppContext;
use crate::store::{store_delete_task, store_set_completed, use_app_store};
use crate::tasks::Task;

/// A single task row
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = task.id;
    let completed = task.completed;

    view! {
        <li class="task-item">
            <label class="checkbox-label">
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=completed
                    on:change=move |ev| store_set_completed(&store, id, event_target_checked(&ev))
                />
                <span class="custom-checkbox"></span>
            </label>

            <span class=if completed { "task-content completed" } else { "task-content" }>
                {task.text}
            </span>
            <span class="task-date">{task.created_at}</span>

            // Actions stay last in the row
            <img
                class="edit-btn"
                src=EDIT_ICON
                alt="Edit Task"
                on:click=move |_| ctx.start_editing(id)
            />
            <img
                class="delete-btn"
                src=DELETE_ICON
                alt="Delete Task"
                on:click=move |_| store_delete_task(&store, id)
            />
        </li>
    }
}
