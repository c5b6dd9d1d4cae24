//! Navigation state types.
//!
//! - `View`: The panels of the main window
//! - `ViewSwitcher`: Shows exactly one of them at a time

// =============================================================================
// VIEW ENUM
// =============================================================================

/// A panel of the main window.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Landing panel with features and testimonials
    #[default]
    Home,
    /// Mission statement and FAQ
    About,
    /// Service cards
    Services,
    /// Module cards
    Modules,
    /// Contact form and export
    Contact,
    /// Profile placeholder
    Profile,
}

impl View {
    /// All panels in navigation bar order.
    pub const ALL: [View; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Modules,
        Self::Contact,
        Self::Profile,
    ];

    /// Label used on the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Modules => "Modules",
            Self::Contact => "Contact",
            Self::Profile => "Profile",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// VIEW SWITCHER
// =============================================================================

/// Holds the fixed set of panels and the one currently shown.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ViewSwitcher {
    active: View,
}

impl ViewSwitcher {
    /// Show `view`, hiding every other panel.
    pub fn show(&mut self, view: View) {
        if self.active != view {
            tracing::debug!("Navigating {} -> {}", self.active, view);
        }
        self.active = view;
    }

    /// The panel currently shown.
    pub fn current(&self) -> View {
        self.active
    }

    /// Whether `view` is the panel currently shown.
    pub fn is_visible(&self, view: View) -> bool {
        self.active == view
    }
}
