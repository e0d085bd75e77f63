//! Drawing Pad Component
//!
//! Popup with a canvas and pencil/eraser/reset/submit tools.
//! The canvas stays mounted while the popup is hidden so closing keeps the sketch.

use leptos::html::Canvas;
use leptos::prelude::*;
use sketch_pad::{apply_op, clear_canvas, context_2d, pointer_position, SketchCore, StrokeOp, StrokeStyle, Tool};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, ERASER_SIZE, STROKE_COLOR, STROKE_WIDTH};
use crate::context::AppContext;
use crate::error::{js_error_message, AppError, Result};
use crate::store::{store_submit_drawing, use_app_store};

const STYLE: StrokeStyle = StrokeStyle {
    color: STROKE_COLOR,
    width: STROKE_WIDTH,
};

#[component]
pub fn DrawingPad() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let canvas_ref = NodeRef::<Canvas>::new();
    let core = StoredValue::new(SketchCore::new(ERASER_SIZE));
    let (tool, set_tool) = signal(Tool::Pencil);

    let replay = move |op: StrokeOp| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        match context_2d(&canvas) {
            Ok(ctx2d) => apply_op(&ctx2d, op, &STYLE),
            Err(e) => log::error!("Canvas unavailable: {}", js_error_message(&e)),
        }
    };

    let on_mousedown = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let at = pointer_position(&canvas, &ev);
        let mut sketch = core.get_value();
        if let Some(op) = sketch.pointer_down(at, ev.button()) {
            core.set_value(sketch);
            replay(op);
        }
    };

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let mut sketch = core.get_value();
        if let Some(op) = sketch.pointer_move(pointer_position(&canvas, &ev)) {
            replay(op);
        }
    };

    let end_stroke = move |_: web_sys::MouseEvent| {
        let mut sketch = core.get_value();
        if let Some(op) = sketch.pointer_up() {
            core.set_value(sketch);
            replay(op);
        }
    };

    let toggle_eraser = move |_| {
        let mut sketch = core.get_value();
        let active = sketch.toggle_eraser();
        core.set_value(sketch);
        set_tool.set(active);
        if let Err(e) = window().alert_with_message(&active.notice()) {
            log::warn!("Tool alert failed: {}", js_error_message(&e));
        }
    };

    let select_pencil = move |_| {
        let mut sketch = core.get_value();
        sketch.select_pencil();
        core.set_value(sketch);
        set_tool.set(Tool::Pencil);
    };

    let reset = move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            if let Err(e) = clear_canvas(&canvas) {
                log::error!("Clearing canvas failed: {}", js_error_message(&e));
            }
        }
    };

    let submit = move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else { return };
        let result: Result<()> = canvas
            .to_data_url()
            .map_err(|e| AppError::Canvas(js_error_message(&e)))
            .and_then(|uri| store_submit_drawing(&store, uri))
            .and_then(|()| clear_canvas(&canvas).map_err(|e| AppError::Canvas(js_error_message(&e))));
        if let Err(e) = result {
            log::error!("Submitting drawing failed: {}", e);
        }
    };

    let tool_class = move |t: Tool| {
        move || if tool.get() == t { "tool-btn active" } else { "tool-btn" }
    };

    view! {
        <div class="drawing-popup" style:display=move || if ctx.pad_open.get() { "flex" } else { "none" }>
            <div class="drawing-popup-content">
                <canvas
                    node_ref=canvas_ref
                    class="drawing-canvas"
                    width=CANVAS_WIDTH.to_string()
                    height=CANVAS_HEIGHT.to_string()
                    on:mousedown=on_mousedown
                    on:mousemove=on_mousemove
                    on:mouseup=end_stroke
                    on:mouseleave=end_stroke
                ></canvas>
                <div class="drawing-tools">
                    <button class=tool_class(Tool::Pencil) id="pencil" on:click=select_pencil>"Pencil"</button>
                    <button class=tool_class(Tool::Eraser) id="eraser" on:click=toggle_eraser>"Eraser"</button>
                    <button class="tool-btn" id="reset" on:click=reset>"Reset"</button>
                    <button class="tool-btn submit" id="submit" on:click=submit>"Submit"</button>
                    <button class="close-btn" on:click=move |_| ctx.set_pad_open(false)>"Close"</button>
                </div>
            </div>
        </div>
    }
}
