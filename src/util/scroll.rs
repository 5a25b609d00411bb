//! Window scroll plumbing: offset reads, smooth anchor scrolling, body
//! scroll locking, section measurement, and a debounced scroll listener.
//!
//! ERROR HANDLING
//! ==============
//! Every lookup tolerates a missing window/document/element by degrading
//! silently; scroll-spy and smooth scrolling are best-effort affordances.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::nav::{HEADER_OFFSET_PX, SectionSpan};

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;
#[cfg(feature = "hydrate")]
use wasm_bindgen::closure::Closure;

/// Current vertical scroll offset of the page.
#[must_use]
pub fn page_y_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.page_y_offset().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Anchor target offset with the fixed-header compensation applied.
#[must_use]
pub fn anchor_target(element_top: f64) -> f64 {
    element_top - HEADER_OFFSET_PX
}

/// Smoothly scroll the window to the section with `id`, compensating for
/// the fixed header. Missing targets are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let element = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        let Some(element) = element else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(anchor_target(f64::from(element.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Lock or restore body scrolling; locked while the mobile menu is open.
pub fn lock_body_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body())
        else {
            return;
        };
        let value = if locked { "hidden" } else { "visible" };
        let _ = body.style().set_property("overflow", value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

/// Measure the vertical extent of each listed section id, in order.
/// Sections missing from the document are skipped.
#[must_use]
pub fn measure_sections(ids: &[&str]) -> Vec<SectionSpan> {
    #[cfg(feature = "hydrate")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| {
                let element = document
                    .get_element_by_id(id)?
                    .dyn_into::<web_sys::HtmlElement>()
                    .ok()?;
                Some(SectionSpan {
                    id: (*id).to_owned(),
                    top: f64::from(element.offset_top()),
                    height: f64::from(element.offset_height()),
                })
            })
            .collect()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ids;
        Vec::new()
    }
}

/// Handle for a window scroll listener; removing is automatic on drop.
pub struct ScrollWatcher {
    #[cfg(feature = "hydrate")]
    closure: Closure<dyn FnMut()>,
}

impl ScrollWatcher {
    /// Attach `on_scroll` to the window scroll event. Returns `None` when
    /// no window exists or registration fails.
    pub fn attach(on_scroll: impl FnMut() + 'static) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let mut on_scroll = on_scroll;
            let closure = Closure::wrap(Box::new(move || on_scroll()) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                .ok()?;
            Some(Self { closure })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_scroll;
            None
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScrollWatcher {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
