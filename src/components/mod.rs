//! UI Components
//!
//! Leptos components for the task list and the drawing pad.

mod new_task_form;
mod task_item;
mod task_list;
mod edit_task_modal;
mod drawing_pad;
mod drawing_gallery;
mod activity_log;

pub use new_task_form::NewTaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use edit_task_modal::EditTaskModal;
pub use drawing_pad::DrawingPad;
pub use drawing_gallery::DrawingGallery;
pub use activity_log::ActivityLog;
