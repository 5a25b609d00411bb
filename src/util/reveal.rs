//! One-shot reveal-on-visibility animator.
//!
//! A single `IntersectionObserver` watches every `.reveal` element. The
//! first time at least 10% of an element enters the viewport (biased 50px
//! early at the bottom edge), it gains the `revealed` class and is
//! unobserved, so each element reveals at most once. Elements declaring a
//! `data-width` attribute are skill bars: their fill width animates to the
//! declared percentage after a short extra delay.
//!
//! ERROR HANDLING
//! ==============
//! Pure visual affordance. Observer construction failure or missing
//! elements silently skip the feature.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Minimum visible fraction before an element reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Bottom-edge bias so reveals fire slightly before true visibility.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Extra delay before a skill bar's fill starts growing.
pub const FILL_DELAY_MS: u32 = 200;

/// Class added to an element when it reveals.
pub const REVEALED_CLASS: &str = "revealed";
/// Selector for observed elements.
pub const REVEAL_SELECTOR: &str = ".reveal";

/// Format the inline width applied to a skill bar from its `data-width`.
#[must_use]
pub fn fill_width(data_width: &str) -> String {
    format!("{data_width}%")
}

/// Live observer handle; dropping it disconnects the observer.
pub struct RevealObserver {
    #[cfg(feature = "hydrate")]
    observer: web_sys::IntersectionObserver,
    #[cfg(feature = "hydrate")]
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

impl RevealObserver {
    /// Observe every element matching [`REVEAL_SELECTOR`]. Returns `None`
    /// outside the browser or when the observer cannot be built.
    pub fn start() -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let document = web_sys::window()?.document()?;

            let callback = Closure::wrap(Box::new(
                |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if !entry.is_intersecting() {
                            continue;
                        }
                        reveal_element(&entry.target());
                        observer.unobserve(&entry.target());
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

            let targets = document.query_selector_all(REVEAL_SELECTOR).ok()?;
            for i in 0..targets.length() {
                if let Some(element) =
                    targets.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                {
                    observer.observe(&element);
                }
            }

            Some(Self { observer, _callback: callback })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn reveal_element(target: &web_sys::Element) {
    use wasm_bindgen::JsCast;

    let _ = target.class_list().add_1(REVEALED_CLASS);

    // Skill bars grow their fill to the declared percentage after a beat.
    if let Some(width) = target.get_attribute("data-width") {
        if let Some(element) = target.dyn_ref::<web_sys::HtmlElement>() {
            let element = element.clone();
            gloo_timers::callback::Timeout::new(FILL_DELAY_MS, move || {
                let _ = element.style().set_property("width", &fill_width(&width));
            })
            .forget();
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
