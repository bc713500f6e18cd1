//! UI components built with Leptos.
//!
//! - [`cursor`] - Custom cursor (fine-pointer devices only)
//! - [`footer`] - Contact section and social links
//! - [`hero`] - Landing section hosting the typing effect and background
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`lightbox`] - Full-screen image overlay
//! - [`magnetic`] - Buttons and links that lean toward the pointer
//! - [`modal`] - "Request access" dialog with contact deep links
//! - [`nav`] - Navigation bar and mobile menu
//! - [`projects`] - Project cards with two-stage media reveal
//! - [`testimonials`] - Testimonial carousel

pub mod cursor;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod lightbox;
pub mod magnetic;
pub mod modal;
pub mod nav;
pub mod projects;
pub mod testimonials;

pub use cursor::CustomCursor;
pub use footer::SiteFooter;
pub use hero::Hero;
pub use lightbox::Lightbox;
pub use modal::RequestModal;
pub use nav::NavBar;
pub use projects::Projects;
pub use testimonials::Testimonials;
