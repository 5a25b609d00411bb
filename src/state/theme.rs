//! Light/dark theme preference.
//!
//! The active theme is mirrored to the `data-theme` attribute on the
//! document root; persistence lives in [`crate::util::storage`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The two legal theme values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the `data-theme` attribute and to storage.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything that is not exactly `"dark"` falls
    /// back to light, so a corrupted store can never wedge the page.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon shown on the toggle control: a sun while dark (click for
    /// light), a moon while light.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}
