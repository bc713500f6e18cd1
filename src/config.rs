//! Application configuration.
//!
//! Centralizes the tuning constants used throughout the page. Page content
//! is loaded at compile time using `include_str!` and parsed on startup.

use folio_core::{ConfigError, SiteConfig};

// =============================================================================
// Content (loaded at compile time)
// =============================================================================

/// Site content document: profile, contact channels, projects, testimonials.
pub const SITE_TOML: &str = include_str!("../assets/site.toml");

/// Parse the embedded site content.
pub fn site_config() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_toml(SITE_TOML)
}

// =============================================================================
// Element Hooks
// =============================================================================

/// Host element of the typing effect.
pub const HERO_TAGLINE_SELECTOR: &str = "#hero-tagline";

/// Host element of the animated background.
pub const BACKGROUND_SELECTOR: &str = "#vanta-canvas";

/// Elements whose text is split into characters and revealed on scroll.
pub const REVEAL_TEXT_SELECTOR: &str = ".reveal-text";

/// Elements that expand the custom cursor while hovered.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [data-cursor]";

/// Devices matching this query get neither the custom cursor nor the
/// pointer-driven background controls.
pub const COARSE_DEVICE_QUERY: &str = "(pointer: coarse), (max-width: 767px)";

// =============================================================================
// Pointer Effects
// =============================================================================

/// Fraction of the remaining distance the custom cursor covers per frame.
pub const CURSOR_EASE: f64 = 0.15;

/// Magnetic pull radius around a button centre (px).
pub const MAGNET_RADIUS_PX: f64 = 50.0;

/// Largest magnetic offset (px).
pub const MAGNET_MAX_OFFSET_PX: f64 = 15.0;

// =============================================================================
// Timing
// =============================================================================

/// Overlay fade-in starts this long after insertion so the transition runs.
pub const OVERLAY_FADE_DELAY_MS: u32 = 10;

/// Lifetime of the reveal flash layer; matches its CSS animation.
pub const REVEAL_FLASH_MS: u32 = 600;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the page.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_site_config_parses() {
        let site = site_config().unwrap();
        assert!(!site.taglines.is_empty());
    }
}
