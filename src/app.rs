//! Tasks & Sketches App
//!
//! Page assembly: the task list and the drawing pad sit side by side and
//! share nothing but the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ActivityLog, DrawingGallery, DrawingPad, EditTaskModal, NewTaskForm, TaskList};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let editing_task = signal::<Option<u32>>(None);
    let pad_open = signal(false);

    provide_context(Store::new(AppState::load()));
    let ctx = AppContext::new(editing_task, pad_open);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <section class="tasks-panel">
                <h1>"To-Do"</h1>
                <NewTaskForm />
                <TaskList />
            </section>

            <section class="drawings-panel">
                <h2>"Drawings"</h2>
                <button class="draw-btn" on:click=move |_| ctx.set_pad_open(true)>"Open drawing pad"</button>
                <DrawingGallery />
            </section>

            <EditTaskModal />
            <DrawingPad />
            <ActivityLog />
        </div>
    }
}
