//! Option records for the external effect libraries.
//!
//! The page loads its smooth-scroll, scroll-reveal, typing, background and
//! text-reveal libraries from script tags. These records describe how each
//! one is configured; they serialize to the camelCase objects the libraries
//! expect.

use serde::Serialize;

use crate::site::Tagline;

// ============================================================================
// Device Class
// ============================================================================

/// Coarse device classification used to tune the heavier effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Fine pointer and a wide viewport.
    #[default]
    Desktop,
    /// Coarse pointer or a narrow viewport.
    Touch,
}

impl DeviceClass {
    /// Classify from pointer coarseness and viewport width.
    pub fn detect(coarse_pointer: bool, viewport_width: f64) -> Self {
        if coarse_pointer || viewport_width < MOBILE_BREAKPOINT_PX {
            DeviceClass::Touch
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_touch(self) -> bool {
        self == DeviceClass::Touch
    }
}

/// Viewports narrower than this are treated as touch devices.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// ============================================================================
// Smooth Scroll
// ============================================================================

/// Options for the smooth-scroll driver.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothScrollOptions {
    pub lerp: f64,
    pub smooth_touch: bool,
}

impl Default for SmoothScrollOptions {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            smooth_touch: false,
        }
    }
}

/// Extract the in-page target selector from an anchor `href`.
///
/// Only fragment links (`#section`) are handled in-page; a bare `#`,
/// `mailto:` and external links are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

// ============================================================================
// Scroll Reveal
// ============================================================================

/// Options for the scroll-triggered reveal driver.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScrollRevealOptions {
    /// Animation duration in milliseconds.
    pub duration: u32,
    /// Animate only the first time an element enters the viewport.
    pub once: bool,
    /// Trigger offset in pixels.
    pub offset: i32,
}

impl Default for ScrollRevealOptions {
    fn default() -> Self {
        Self {
            duration: 800,
            once: true,
            offset: 100,
        }
    }
}

// ============================================================================
// Typing Effect
// ============================================================================

/// Constructor options for the typing driver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingOptions {
    /// Milliseconds per typed character.
    pub speed: u32,
    #[serde(rename = "loop")]
    pub repeat: bool,
    pub break_lines: bool,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            speed: 50,
            repeat: true,
            break_lines: false,
        }
    }
}

/// Per-step options: pause after the step completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepDelay {
    pub delay: u32,
}

/// One queued typing operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypingStep {
    /// Type `text`, then hold for `delay_ms`.
    Type { text: String, delay_ms: u32 },
    /// Delete everything typed so far, then pause for `delay_ms`.
    Delete { delay_ms: u32 },
}

impl TypingStep {
    pub fn delay(&self) -> StepDelay {
        match self {
            TypingStep::Type { delay_ms, .. } | TypingStep::Delete { delay_ms } => StepDelay {
                delay: *delay_ms,
            },
        }
    }
}

/// Pause after erasing a tagline before typing the next one.
pub const DEFAULT_DELETE_PAUSE_MS: u32 = 1500;

/// Ordered typing operations for the hero tagline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TypingScript {
    pub options: TypingOptions,
    pub steps: Vec<TypingStep>,
}

impl TypingScript {
    /// Type each tagline in turn, erasing between consecutive ones.
    ///
    /// The last tagline is not erased; with looping enabled the driver
    /// restarts from the first.
    pub fn from_taglines(taglines: &[Tagline], delete_pause_ms: u32) -> Self {
        let mut steps = Vec::with_capacity(taglines.len() * 2);
        for (i, line) in taglines.iter().enumerate() {
            if i > 0 {
                steps.push(TypingStep::Delete {
                    delay_ms: delete_pause_ms,
                });
            }
            steps.push(TypingStep::Type {
                text: line.text.clone(),
                delay_ms: line.hold_ms,
            });
        }
        Self {
            options: TypingOptions::default(),
            steps,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

// ============================================================================
// Animated Background
// ============================================================================

/// Configuration for the animated network background.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundConfig {
    /// Selector of the host element.
    pub el: String,
    pub mouse_controls: bool,
    pub touch_controls: bool,
    pub gyro_controls: bool,
    pub min_height: f64,
    pub min_width: f64,
    pub scale: f64,
    pub scale_mobile: f64,
    pub color: u32,
    pub background_color: u32,
    pub points: f64,
    pub max_distance: f64,
    pub spacing: f64,
}

impl BackgroundConfig {
    /// Tuning for `device`: touch devices get fewer, sparser points and no
    /// pointer controls.
    pub fn for_device(selector: &str, device: DeviceClass) -> Self {
        let touch = device.is_touch();
        Self {
            el: selector.to_string(),
            mouse_controls: !touch,
            touch_controls: !touch,
            gyro_controls: false,
            min_height: 200.0,
            min_width: 200.0,
            scale: 1.0,
            scale_mobile: 1.0,
            color: 0x00aaff,
            background_color: 0x050505,
            points: if touch { 6.0 } else { 12.0 },
            max_distance: if touch { 15.0 } else { 22.0 },
            spacing: if touch { 20.0 } else { 16.0 },
        }
    }
}

// ============================================================================
// Character Text Reveal
// ============================================================================

/// Split text into one glyph per character for staggered animation.
///
/// Spaces become non-breaking so the inline-block spans keep their width.
pub fn split_glyphs(text: &str) -> Vec<String> {
    text.chars()
        .map(|c| if c == ' ' { '\u{a0}' } else { c })
        .map(String::from)
        .collect()
}

/// Hidden starting state of each glyph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GlyphFrom {
    pub opacity: f64,
    pub y: f64,
}

/// Scroll trigger window; the trigger element itself is attached at runtime.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollTriggerRange {
    pub start: String,
    pub end: String,
    pub toggle_actions: String,
}

/// Tween from [`GlyphFrom`] to the visible state.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphTween {
    pub opacity: f64,
    pub y: f64,
    pub duration: f64,
    pub stagger: f64,
    pub ease: String,
    pub scroll_trigger: ScrollTriggerRange,
}

/// Starting state and tween for character reveals.
#[derive(Clone, Debug, PartialEq)]
pub struct TextReveal {
    pub from: GlyphFrom,
    pub tween: GlyphTween,
}

impl Default for TextReveal {
    fn default() -> Self {
        Self {
            from: GlyphFrom {
                opacity: 0.0,
                y: 50.0,
            },
            tween: GlyphTween {
                opacity: 1.0,
                y: 0.0,
                duration: 0.8,
                stagger: 0.05,
                ease: "power3.out".to_string(),
                scroll_trigger: ScrollTriggerRange {
                    start: "top 80%".to_string(),
                    end: "bottom 20%".to_string(),
                    toggle_actions: "play none none none".to_string(),
                },
            },
        }
    }
}
