//! Widget Configuration
//!
//! Compile-time settings shared by the task list and the drawing pad.

use log::LevelFilter;

/// Storage key for the task array
pub const TASKS_KEY: &str = "tasks";

/// Storage key for the drawing data-URI array
pub const DRAWINGS_KEY: &str = "drawings";

/// Characters shown before a task's text is cut off
pub const TEXT_LIMIT: usize = 30;

/// Appended to text cut at `TEXT_LIMIT`
pub const ELLIPSIS: &str = "...";

/// Side length of the square cleared by one eraser step, in canvas pixels
pub const ERASER_SIZE: f64 = 20.0;

pub const CANVAS_WIDTH: u32 = 500;
pub const CANVAS_HEIGHT: u32 = 400;
pub const STROKE_COLOR: &str = "#000000";
pub const STROKE_WIDTH: f64 = 2.0;

pub const EDIT_ICON: &str = "/image/edit.png";
pub const DELETE_ICON: &str = "/image/delete.png";

pub const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Lines kept for the activity log panel
pub const LOG_CAPACITY: usize = 50;
