//! Platform-independent state and derivations for the portfolio page.
//!
//! Every interactive section of the page owns one state record from this
//! crate and derives its DOM output from it:
//!
//! - [`Carousel`] - Testimonial slide index with wraparound navigation
//! - [`ContactModal`], [`ContactChannels`] - Request-access dialog and deep links
//! - [`MediaReveal`] - Two-stage project media disclosure
//! - [`NavMenu`] - Collapsible mobile navigation
//! - [`CursorFollow`], [`Magnet`] - Pointer-follow effects
//! - [`effects`] - Option records handed to the external effect libraries
//! - [`SiteConfig`] - Page content loaded from TOML

mod carousel;
mod contact;
pub mod effects;
pub mod error;
mod nav;
mod pointer;
mod reveal;
mod site;

pub use carousel::Carousel;
pub use contact::{ContactChannels, ContactModal, DEFAULT_PROJECT_NAME, DeepLinks};
pub use error::ConfigError;
pub use nav::NavMenu;
pub use pointer::{CursorFollow, Magnet, MagnetField, Point};
pub use reveal::{MediaReveal, RevealAction};
pub use site::{
    CarouselSettings, NavLink, Profile, Project, SiteConfig, SocialLink, Tagline, Testimonial,
};
