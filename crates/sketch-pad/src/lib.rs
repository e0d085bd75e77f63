//! Sketch Pad Utilities
//!
//! Freehand drawing on a 2D canvas using mouse events.
//! `SketchCore` is the pointer state machine and never touches the DOM;
//! it returns `StrokeOp`s which `apply_op` replays onto a canvas context.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

/// Active drawing tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Pencil,
    Eraser,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Eraser => "Eraser",
        }
    }

    /// Text of the alert shown when the eraser is toggled
    pub fn notice(&self) -> String {
        format!("{} mode on", self.label())
    }
}

/// `MouseEvent.button` of the main (usually left) button
pub const PRIMARY_BUTTON: i16 = 0;

/// A point in canvas pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas operation produced by a pointer transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeOp {
    /// Start a fresh path at the point
    BeginPath(Point),
    /// Stroke a segment from the end of the current path to the point
    LineTo(Point),
    /// Clear a `size` x `size` square centred on the point
    Erase { at: Point, size: f64 },
    /// Drop the current path so the next stroke is not joined to it
    EndPath,
}

/// Pen appearance used when replaying `StrokeOp::LineTo`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: &'static str,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self { color: "#000000", width: 2.0 }
    }
}

/// Pointer state machine over `drawing` (button held) and the active tool
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchCore {
    drawing: bool,
    tool: Tool,
    eraser_size: f64,
}

impl SketchCore {
    pub fn new(eraser_size: f64) -> Self {
        Self {
            drawing: false,
            tool: Tool::Pencil,
            eraser_size,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn eraser_mode(&self) -> bool {
        self.tool == Tool::Eraser
    }

    /// Flip between pencil and eraser, returning the newly active tool
    pub fn toggle_eraser(&mut self) -> Tool {
        self.tool = match self.tool {
            Tool::Pencil => Tool::Eraser,
            Tool::Eraser => Tool::Pencil,
        };
        self.tool
    }

    /// Force draw mode
    pub fn select_pencil(&mut self) {
        self.tool = Tool::Pencil;
    }

    /// Only the primary button starts a stroke.
    pub fn pointer_down(&mut self, at: Point, button: i16) -> Option<StrokeOp> {
        if button != PRIMARY_BUTTON {
            return None;
        }
        self.drawing = true;
        Some(StrokeOp::BeginPath(at))
    }

    /// Returns `None` unless the button is held.
    pub fn pointer_move(&mut self, at: Point) -> Option<StrokeOp> {
        if !self.drawing {
            return None;
        }
        Some(match self.tool {
            Tool::Pencil => StrokeOp::LineTo(at),
            Tool::Eraser => StrokeOp::Erase {
                at,
                size: self.eraser_size,
            },
        })
    }

    /// Covers both mouseup and mouseleave.
    pub fn pointer_up(&mut self) -> Option<StrokeOp> {
        if !self.drawing {
            return None;
        }
        self.drawing = false;
        Some(StrokeOp::EndPath)
    }
}

/// Get the 2D context of a canvas
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()
        .map_err(JsValue::from)
}

/// Replay a single operation onto the context
pub fn apply_op(ctx: &CanvasRenderingContext2d, op: StrokeOp, style: &StrokeStyle) {
    match op {
        StrokeOp::BeginPath(p) => {
            ctx.begin_path();
            ctx.move_to(p.x, p.y);
        }
        StrokeOp::LineTo(p) => {
            ctx.set_stroke_style_str(style.color);
            ctx.set_line_width(style.width);
            ctx.set_line_cap("round");
            ctx.line_to(p.x, p.y);
            ctx.stroke();
        }
        StrokeOp::Erase { at, size } => {
            ctx.clear_rect(at.x - size / 2.0, at.y - size / 2.0, size, size);
        }
        StrokeOp::EndPath => ctx.begin_path(),
    }
}

/// Wipe the whole canvas and drop any open path
pub fn clear_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let ctx = context_2d(canvas)?;
    ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    ctx.begin_path();
    Ok(())
}

/// Map a mouse event to canvas pixel coordinates.
/// The canvas may be CSS-scaled, so client offsets are rescaled to the backing store.
pub fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    scale_to_canvas(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
        (rect.width(), rect.height()),
        (canvas.width() as f64, canvas.height() as f64),
    )
}

fn scale_to_canvas(offset_x: f64, offset_y: f64, css: (f64, f64), backing: (f64, f64)) -> Point {
    let sx = if css.0 > 0.0 { backing.0 / css.0 } else { 1.0 };
    let sy = if css.1 > 0.0 { backing.1 / css.1 } else { 1.0 };
    Point::new(offset_x * sx, offset_y * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_without_press_does_nothing() {
        let mut core = SketchCore::new(10.0);
        assert_eq!(core.pointer_move(Point::new(5.0, 5.0)), None);
        assert_eq!(core.pointer_up(), None);
    }

    #[test]
    fn test_pencil_stroke() {
        let mut core = SketchCore::new(10.0);
        assert_eq!(
            core.pointer_down(Point::new(1.0, 2.0), PRIMARY_BUTTON),
            Some(StrokeOp::BeginPath(Point::new(1.0, 2.0)))
        );
        assert!(core.is_drawing());
        assert_eq!(core.pointer_move(Point::new(3.0, 4.0)), Some(StrokeOp::LineTo(Point::new(3.0, 4.0))));
        assert_eq!(core.pointer_up(), Some(StrokeOp::EndPath));
        assert!(!core.is_drawing());
        assert_eq!(core.pointer_move(Point::new(6.0, 6.0)), None);
    }

    #[test]
    fn test_eraser_clears_fixed_square() {
        let mut core = SketchCore::new(12.0);
        assert_eq!(core.toggle_eraser(), Tool::Eraser);
        assert!(core.eraser_mode());
        core.pointer_down(Point::new(0.0, 0.0), PRIMARY_BUTTON);
        assert_eq!(
            core.pointer_move(Point::new(20.0, 30.0)),
            Some(StrokeOp::Erase { at: Point::new(20.0, 30.0), size: 12.0 })
        );
    }

    #[test]
    fn test_secondary_buttons_do_not_draw() {
        let mut core = SketchCore::new(10.0);
        // middle and right buttons
        for button in [1, 2] {
            assert_eq!(core.pointer_down(Point::new(1.0, 1.0), button), None);
            assert!(!core.is_drawing());
            assert_eq!(core.pointer_move(Point::new(5.0, 5.0)), None);
        }
    }

    #[test]
    fn test_toggle_notice() {
        let mut core = SketchCore::new(10.0);
        assert_eq!(core.toggle_eraser().notice(), "Eraser mode on");
        assert_eq!(core.toggle_eraser().notice(), "Pencil mode on");
    }

    #[test]
    fn test_toggle_and_pencil() {
        let mut core = SketchCore::new(10.0);
        core.toggle_eraser();
        assert_eq!(core.toggle_eraser(), Tool::Pencil);
        core.toggle_eraser();
        core.select_pencil();
        assert_eq!(core.tool(), Tool::Pencil);
        core.select_pencil();
        assert_eq!(core.tool(), Tool::Pencil);
    }

    #[test]
    fn test_scale_to_canvas() {
        // 500px backing store shown at 250 CSS px
        let p = scale_to_canvas(100.0, 50.0, (250.0, 200.0), (500.0, 400.0));
        assert_eq!(p, Point::new(200.0, 100.0));

        // Zero-sized rect falls back to identity
        let p = scale_to_canvas(7.0, 8.0, (0.0, 0.0), (500.0, 400.0));
        assert_eq!(p, Point::new(7.0, 8.0));
    }
}
