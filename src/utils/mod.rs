//! Utility modules for DOM access, animation frames and overlays.
//!
//! Provides:
//! - [`dom`] - Window, document and body helpers
//! - [`animation_loop`] - Per-frame loop that re-arms itself
//! - [`Overlay`] - Disposable full-screen image overlay

pub mod dom;
mod frame;
mod overlay;

pub use frame::animation_loop;
pub use overlay::Overlay;
