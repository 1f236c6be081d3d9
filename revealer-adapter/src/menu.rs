use alloc::string::String;

/// Hamburger / slide-out menu state.
///
/// The UI mirrors `is_open` as an `active` class on both the toggle button
/// and the menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Navigation-link click: always closes.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// A two-state disclosure, e.g. the projects grid's
/// "See All Projects" / "Show Less" button.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disclosure {
    expanded: bool,
    collapsed_label: String,
    expanded_label: String,
}

impl Disclosure {
    pub fn new(collapsed_label: impl Into<String>, expanded_label: impl Into<String>) -> Self {
        Self {
            expanded: false,
            collapsed_label: collapsed_label.into(),
            expanded_label: expanded_label.into(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// The button label for the current state.
    pub fn label(&self) -> &str {
        if self.expanded {
            &self.expanded_label
        } else {
            &self.collapsed_label
        }
    }
}
