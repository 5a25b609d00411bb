//! Decorative floating-shape drift.
//!
//! Each `.shape` element gets its own interval, staggered by index, that
//! nudges the element to a small random translation. Handles cancel their
//! intervals on drop.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

/// Base drift period for the first shape.
pub const BASE_PERIOD_MS: u32 = 6000;
/// Additional period per shape index so shapes never move in lockstep.
pub const PERIOD_STEP_MS: u32 = 1000;
/// Maximum translation magnitude on each axis.
pub const MAX_OFFSET_PX: f64 = 10.0;

/// Selector for drifting elements.
pub const SHAPE_SELECTOR: &str = ".shape";

/// Drift period for the shape at `index`.
#[must_use]
pub fn drift_period_ms(index: u32) -> u32 {
    BASE_PERIOD_MS + PERIOD_STEP_MS * index
}

/// Map a uniform random sample in `[0, 1)` to an offset in
/// `[-MAX_OFFSET_PX, MAX_OFFSET_PX)`.
#[must_use]
pub fn drift_offset(sample: f64) -> f64 {
    sample * (2.0 * MAX_OFFSET_PX) - MAX_OFFSET_PX
}

/// Handle owning one interval per shape; dropping stops the drift.
pub struct ShapeDrift {
    #[cfg(feature = "hydrate")]
    _intervals: Vec<gloo_timers::callback::Interval>,
}

impl ShapeDrift {
    /// Start drifting every element matching [`SHAPE_SELECTOR`]. Returns
    /// `None` outside the browser or when no shapes exist.
    pub fn start() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let nodes = document.query_selector_all(SHAPE_SELECTOR).ok()?;
            let mut intervals = Vec::new();
            for i in 0..nodes.length() {
                let Some(element) = nodes
                    .get(i)
                    .and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
                else {
                    continue;
                };
                let interval = gloo_timers::callback::Interval::new(drift_period_ms(i), move || {
                    let x = drift_offset(js_sys::Math::random());
                    let y = drift_offset(js_sys::Math::random());
                    let _ = element
                        .style()
                        .set_property("transform", &format!("translate({x:.1}px, {y:.1}px)"));
                });
                intervals.push(interval);
            }
            if intervals.is_empty() {
                return None;
            }
            Some(Self { _intervals: intervals })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}
