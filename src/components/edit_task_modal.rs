//! Edit Task Modal Component
//!
//! Popup with the task text pre-filled. Save ignores blank input and keeps
//! the popup open; Cancel closes it without changes.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_edit_task, use_app_store, AppStateStoreFields};

#[component]
pub fn EditTaskModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        {move || ctx.editing_task.get().map(|task_id| {
            let prefill = store
                .tasks()
                .read_untracked()
                .get(task_id)
                .map(|task| task.editable_text().to_string())
                .unwrap_or_default();
            let (value, set_value) = signal(prefill);

            let save = move |_| {
                if store_edit_task(&store, task_id, &value.get_untracked()) {
                    ctx.stop_editing();
                }
            };

            view! {
                <div class="popup">
                    <div class="popup-content">
                        <input
                            type="text"
                            class="edit-input"
                            prop:value=move || value.get()
                            on:input=move |ev| set_value.set(event_target_value(&ev))
                        />
                        <button class="save-btn" on:click=save>"Save"</button>
                        <button class="close-btn" on:click=move |_| ctx.stop_editing()>"Cancel"</button>
                    </div>
                </div>
            }
        })}
    }
}
