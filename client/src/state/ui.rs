//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of session and form state so styling
//! controls can evolve independently of the webhook flow.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Color theme applied as `data-theme` on the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Gradient tint used behind form cards.
    #[must_use]
    pub fn card_gradient(self) -> &'static str {
        match self {
            Self::Dark => "#262626",
            Self::Light => "#D9D9D955",
        }
    }
}

/// UI state shared through context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
