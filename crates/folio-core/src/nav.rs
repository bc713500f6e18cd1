//! Mobile navigation menu state.

/// Open/closed state of the collapsible navigation panel.
///
/// While open, the toggle and the panel carry the `active` marker, the body
/// carries `menu-open` and page scroll is locked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu. Closing an already closed menu does nothing.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Class list suffix for the toggle control and the panel.
    pub fn active_class(&self) -> Option<&'static str> {
        self.open.then_some("active")
    }
}
