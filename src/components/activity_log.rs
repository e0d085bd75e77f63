//! Activity Log Component
//!
//! Collapsible panel listing recent log lines from the console logger.

use leptos::prelude::*;

#[component]
pub fn ActivityLog() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<String>::new());

    let toggle = move |_| {
        let now_open = !open.get_untracked();
        if now_open {
            set_lines.set(console_logger::recent_lines());
        }
        set_open.set(now_open);
    };

    view! {
        <div class="activity-log">
            <button class="activity-log-toggle" on:click=toggle>
                {move || if open.get() { "Hide activity" } else { "Show activity" }}
            </button>
            <Show when=move || open.get()>
                <ol class="activity-log-lines">
                    {move || lines.get().into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                </ol>
            </Show>
        </div>
    }
}
