//! New Task Form Component
//!
//! Text input and add button for creating tasks.

use leptos::prelude::*;

use crate::store::{store_add_task, use_app_store};

/// Input row for new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_app_store();
    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |_| {
        let text = new_text.get_untracked();
        if store_add_task(&store, &text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="new-task-row">
            <input
                type="text"
                class="text"
                placeholder="Add a new task..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button class="adbtn" on:click=add_task>"Add"</button>
        </div>
    }
}
