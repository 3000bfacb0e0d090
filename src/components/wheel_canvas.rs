//! Wheel Canvas Component
//!
//! Draws the segmented wheel on a 2D canvas, runs the spin animation on
//! requestAnimationFrame, and announces the winning segment. The wheel
//! is rebuilt from scratch whenever the option list changes; a rebuild
//! disposes any in-flight spin.

use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::spin::{spin_allowed, SpinPlan};
use crate::store::{store_notify, use_app_store, AppStateStoreFields, SpinPhase};
use crate::wheel::{resolve_segment, Wheel};

const CANVAS_SIZE: f64 = 400.0;
const OUTER_RADIUS: f64 = 180.0;
const TEXT_FONT: &str = "16px sans-serif";

/// This renderer lays segment 0 out starting at the pointer position
/// (12 o'clock), so the pointer sits at the wheel's zero reference and
/// no offset correction is needed. A renderer with a different layout
/// convention must re-derive this constant.
const POINTER_OFFSET_DEG: f64 = 0.0;

/// The wheel, its spin button, and the fixed pointer overlay
#[component]
pub fn WheelCanvas() -> impl IntoView {
    let store = use_app_store();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    let wheel = Memo::new(move |_| Wheel::build(&store.options().get()));
    let (rotation, set_rotation) = signal(0.0f64);

    // Bumped on every rebuild; an in-flight animation frame that sees a
    // stale epoch stops without announcing anything.
    let spin_epoch: StoredValue<u64> = StoredValue::new(0);

    // Rebuild: dispose any in-flight spin and reset the wheel to rest.
    Effect::new(move |_| {
        let _ = wheel.get();
        spin_epoch.update_value(|e| *e += 1);
        store.phase().set(SpinPhase::Idle);
        set_rotation.set(0.0);
    });

    // Redraw on every rotation or wheel change.
    Effect::new(move |_| {
        let current = wheel.get();
        let angle = rotation.get();
        if let Some(canvas) = canvas_ref.get() {
            if let Err(e) = draw_wheel(&canvas, &current, angle) {
                web_sys::console::log_1(&format!("[WHEEL] draw failed: {:?}", e).into());
            }
        }
    });

    let spin_disabled = move || !spin_allowed(wheel.get().placeholder, store.phase().get());

    let on_spin = move |_| {
        if !spin_allowed(wheel.get_untracked().placeholder, store.phase().get_untracked()) {
            return;
        }
        store.phase().set(SpinPhase::Spinning);

        let plan = SpinPlan::new(js_sys::Math::random());
        let base = rotation.get_untracked();
        let my_epoch = spin_epoch.get_value();

        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let first = frame.clone();
        let started = Rc::new(Cell::new(None::<f64>));

        *first.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if spin_epoch.get_value() != my_epoch {
                // The wheel was rebuilt under us; the rebuild already
                // reset phase and rotation.
                let _ = frame.borrow_mut().take();
                return;
            }
            let begun = match started.get() {
                Some(t) => t,
                None => {
                    started.set(Some(timestamp));
                    timestamp
                }
            };
            let elapsed = timestamp - begun;
            set_rotation.set(base + plan.angle_at(elapsed));

            if plan.finished(elapsed) {
                let _ = frame.borrow_mut().take();
                let final_rotation = base + plan.total_rotation;
                let stopped = wheel.get_untracked();
                let index = resolve_segment(
                    final_rotation,
                    stopped.segments.len(),
                    POINTER_OFFSET_DEG,
                );
                let winner = stopped.segments[index].label.clone();
                web_sys::console::log_1(
                    &format!("[WHEEL] stopped at {:.1} deg -> segment {}", final_rotation, index)
                        .into(),
                );
                store_notify(&store, format!("Lunch today: \"{}\"!", winner), false);
                store.phase().set(SpinPhase::Idle);
            } else {
                request_animation_frame(frame.borrow().as_ref().unwrap());
            }
        }));
        request_animation_frame(first.borrow().as_ref().unwrap());
    };

    view! {
        <div class="wheel-panel">
            <canvas
                node_ref=canvas_ref
                class="wheel-canvas"
                width="400"
                height="400"
            ></canvas>
            <button class="spin-button" prop:disabled=spin_disabled on:click=on_spin>
                {move || if store.phase().get() == SpinPhase::Spinning { "Spinning..." } else { "Spin!" }}
            </button>
        </div>
    }
}

fn request_animation_frame(callback: &Closure<dyn FnMut(f64)>) {
    web_sys::window()
        .expect("no window")
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .expect("requestAnimationFrame failed");
}

/// Paint the whole wheel at `rotation_deg`, then the fixed pointer on top.
fn draw_wheel(
    canvas: &HtmlCanvasElement,
    wheel: &Wheel,
    rotation_deg: f64,
) -> Result<(), JsValue> {
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let center = CANVAS_SIZE / 2.0;
    ctx.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE);

    ctx.save();
    ctx.translate(center, center)?;
    ctx.rotate(rotation_deg.to_radians())?;

    let count = wheel.segments.len();
    let segment_rad = 2.0 * PI / count as f64;
    for (i, segment) in wheel.segments.iter().enumerate() {
        // Segment 0 starts at 12 o'clock; layout runs clockwise.
        let start = -PI / 2.0 + i as f64 * segment_rad;
        let end = start + segment_rad;

        ctx.begin_path();
        ctx.move_to(0.0, 0.0);
        ctx.arc(0.0, 0.0, OUTER_RADIUS, start, end)?;
        ctx.close_path();
        ctx.set_fill_style_str(segment.fill);
        ctx.fill();
        ctx.set_stroke_style_str("#ffffff");
        ctx.set_line_width(2.0);
        ctx.stroke();

        ctx.save();
        ctx.rotate(start + segment_rad / 2.0)?;
        ctx.set_fill_style_str("#ffffff");
        ctx.set_font(TEXT_FONT);
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&segment.label, OUTER_RADIUS - 12.0, 0.0)?;
        ctx.restore();
    }
    ctx.restore();

    draw_pointer(&ctx)?;
    Ok(())
}

/// Fixed triangle pointer at 12 o'clock, drawn unrotated over the wheel.
fn draw_pointer(ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
    ctx.set_stroke_style_str("navy");
    ctx.set_fill_style_str("#000000");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(170.0, 0.0);
    ctx.line_to(230.0, 0.0);
    ctx.line_to(200.0, 40.0);
    ctx.line_to(171.0, 0.0);
    ctx.stroke();
    ctx.fill();
    Ok(())
}
