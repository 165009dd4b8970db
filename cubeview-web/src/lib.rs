/// Cubeview Web - canvas-backed cube viewer for the browser
///
/// Wraps the shared rendering core in a `requestAnimationFrame` loop
/// over a 2D canvas context. The page's sliders and buttons call the
/// exported setters; the loop reads the current parameters each frame.
use cubeview_core::{project_cube, ViewParams, CUBE_EDGES};
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BACKGROUND_TOP: &str = "#f5f7fa";
const BACKGROUND_BOTTOM: &str = "#c3cfe2";
const EDGE_COLOR: &str = "#667eea";
const VERTEX_COLOR: &str = "#764ba2";
const EDGE_WIDTH: f64 = 2.0;
const VERTEX_RADIUS: f64 = 5.0;

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

/// Canvas, context, and view state behind the exported handle.
struct Viewer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    params: ViewParams,
}

impl Viewer {
    /// One animation frame: repaint the background, advance auto-rotate,
    /// then draw the wireframe from the current parameters.
    fn draw_frame(&mut self) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        // Clear canvas
        self.ctx.set_fill_style_str("white");
        self.ctx.fill_rect(0.0, 0.0, width, height);

        // Diagonal two-stop gradient background
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, width, height);
        gradient.add_color_stop(0.0, BACKGROUND_TOP)?;
        gradient.add_color_stop(1.0, BACKGROUND_BOTTOM)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);

        self.params.step_auto_rotate();

        let projected = project_cube(&self.params);
        let (cx, cy) = (width / 2.0, height / 2.0);

        // Edges
        self.ctx.set_stroke_style_str(EDGE_COLOR);
        self.ctx.set_line_width(EDGE_WIDTH);
        for [start, end] in CUBE_EDGES {
            self.ctx.begin_path();
            self.ctx
                .move_to(cx + projected[start].x, cy + projected[start].y);
            self.ctx
                .line_to(cx + projected[end].x, cy + projected[end].y);
            self.ctx.stroke();
        }

        // Vertices
        self.ctx.set_fill_style_str(VERTEX_COLOR);
        for point in projected {
            self.ctx.begin_path();
            self.ctx
                .arc(cx + point.x, cy + point.y, VERTEX_RADIUS, 0.0, TAU)?;
            self.ctx.fill();
        }

        Ok(())
    }
}

/// Exported viewer handle driving one canvas element.
#[wasm_bindgen]
pub struct CubeViewer {
    inner: Rc<RefCell<Viewer>>,
    running: Rc<Cell<bool>>,
}

#[wasm_bindgen]
impl CubeViewer {
    /// Bind to a canvas element by id. Fails if the element or its 2D
    /// context is missing; no animation loop starts in that case.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CubeViewer, JsValue> {
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("element is not a canvas"))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        Ok(CubeViewer {
            inner: Rc::new(RefCell::new(Viewer {
                canvas,
                ctx,
                params: ViewParams::new(),
            })),
            running: Rc::new(Cell::new(false)),
        })
    }

    pub fn rotation_x(&self) -> f64 {
        self.inner.borrow().params.rotation_x
    }

    pub fn set_rotation_x(&self, degrees: f64) {
        self.inner.borrow_mut().params.rotation_x = degrees;
    }

    pub fn rotation_y(&self) -> f64 {
        self.inner.borrow().params.rotation_y
    }

    pub fn set_rotation_y(&self, degrees: f64) {
        self.inner.borrow_mut().params.rotation_y = degrees;
    }

    pub fn rotation_z(&self) -> f64 {
        self.inner.borrow().params.rotation_z
    }

    pub fn set_rotation_z(&self, degrees: f64) {
        self.inner.borrow_mut().params.rotation_z = degrees;
    }

    pub fn scale(&self) -> f64 {
        self.inner.borrow().params.scale
    }

    pub fn set_scale(&self, scale: f64) {
        self.inner.borrow_mut().params.scale = scale;
    }

    pub fn auto_rotate(&self) -> bool {
        self.inner.borrow().params.auto_rotate
    }

    /// Flip auto-rotate and return the new state.
    pub fn toggle_auto_rotate(&self) -> bool {
        self.inner.borrow_mut().params.toggle_auto_rotate()
    }

    /// Label for the auto-rotate button in its current state.
    pub fn auto_rotate_label(&self) -> String {
        if self.auto_rotate() {
            "Stop Rotation".to_string()
        } else {
            "Auto Rotate".to_string()
        }
    }

    /// Angle summary for the rotation readout.
    pub fn rotation_display(&self) -> String {
        self.inner.borrow().params.rotation_display()
    }

    /// Reset to the home view and switch auto-rotate off.
    pub fn reset(&self) {
        self.inner.borrow_mut().params.reset();
    }

    /// Paint a single frame without scheduling another.
    pub fn render_frame(&self) -> Result<(), JsValue> {
        self.inner.borrow_mut().draw_frame()
    }

    /// Start the self-rescheduling animation loop. Idempotent while
    /// already running.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);

        // The closure holds a slot containing itself so it can keep
        // calling `request_animation_frame`. Returning without
        // rescheduling ends the loop; the flag flips back only through
        // a fresh `start`.
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let scheduler = slot.clone();
        let inner = self.inner.clone();
        let running = self.running.clone();

        *scheduler.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            if let Err(err) = inner.borrow_mut().draw_frame() {
                web_sys::console::error_1(&err);
                running.set(false);
                return;
            }
            if let Some(cb) = slot.borrow().as_ref() {
                if let Ok(win) = window() {
                    let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = scheduler.borrow().as_ref() {
            window()?.request_animation_frame(cb.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    /// Stop the loop. The pending frame observes the flag and skips
    /// its reschedule, so nothing fires after that.
    pub fn stop(&self) {
        self.running.set(false);
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    web_sys::console::log_1(&"cubeview-web loaded".into());
    Ok(())
}
