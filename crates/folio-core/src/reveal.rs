//! Two-stage project media disclosure.

/// What a click on a project's media wrapper should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Show the dashboard image in place and play the flash layer.
    Reveal,
    /// Open the full-screen overlay.
    Expand,
}

/// Per-card reveal flag.
///
/// Starts hidden, flips on the first click and never resets, so every
/// click after the first expands the media.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaReveal {
    revealed: bool,
}

impl MediaReveal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Register a click and return the action it triggers.
    pub fn click(&mut self) -> RevealAction {
        if self.revealed {
            RevealAction::Expand
        } else {
            self.revealed = true;
            RevealAction::Reveal
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_click_reveals_without_expanding() {
        let mut media = MediaReveal::new();
        assert!(!media.is_revealed());
        assert_eq!(media.click(), RevealAction::Reveal);
        assert!(media.is_revealed());
    }

    #[test]
    fn test_later_clicks_expand() {
        let mut media = MediaReveal::new();
        media.click();
        assert_eq!(media.click(), RevealAction::Expand);
        assert_eq!(media.click(), RevealAction::Expand);
        assert!(media.is_revealed());
    }

    #[test]
    fn test_cards_are_independent() {
        let mut first = MediaReveal::new();
        let second = MediaReveal::new();
        first.click();
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }
}
