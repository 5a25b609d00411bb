//! Navigation chrome state and scroll-spy section resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar reads this state from context; the debounced window scroll
//! listener writes it. Section geometry is measured in `util::scroll` and
//! resolved here so the range logic stays natively testable.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Vertical offset past which the navbar switches to its "scrolled" style.
pub const SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Lookahead bias applied to each section top so the nav link flips
/// slightly before the section edge reaches the viewport top.
pub const SECTION_BIAS_PX: f64 = 100.0;

/// Fixed-header compensation subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Quiet window for the trailing-edge scroll debounce.
pub const SCROLL_DEBOUNCE_MS: u32 = 10;

/// In-page sections, in document order: `(element id, nav label)`.
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Navigation chrome state shared through context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Mobile menu open flag; while open, body scrolling is locked.
    pub menu_open: bool,
    /// True once the page has scrolled past [`SCROLLED_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Id of the section currently containing the scroll offset, if any.
    pub active_section: Option<String>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Unconditionally close the menu; called whenever a nav link fires.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Measured vertical extent of one section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Resolve the active section for a scroll offset.
///
/// A section matches when the offset falls within
/// `[top - SECTION_BIAS_PX, top - SECTION_BIAS_PX + height)`. Spans are
/// evaluated in document order and the first match wins; overlapping
/// ranges only occur under broken markup.
#[must_use]
pub fn active_section(offset: f64, spans: &[SectionSpan]) -> Option<&str> {
    spans.iter().find_map(|span| {
        let start = span.top - SECTION_BIAS_PX;
        if offset >= start && offset < start + span.height {
            Some(span.id.as_str())
        } else {
            None
        }
    })
}

/// Whether the navbar should carry its "scrolled" style at this offset.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}
