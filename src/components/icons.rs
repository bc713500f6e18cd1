//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUpRight as ArrowUpRight, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuExpand as Expand, LuLock as Lock, LuMail as Mail,
        LuMenu as Menu, LuMessageCircle as Message, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as Expand, BsArrowUpRight as ArrowUpRight,
        BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight, BsEnvelope as Mail,
        BsList as Menu, BsLockFill as Lock, BsWhatsapp as Message, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(LOCK, Lock);
themed_icon!(EXPAND, Expand);
themed_icon!(MESSAGE, Message);
themed_icon!(MAIL, Mail);
themed_icon!(ARROW_UP_RIGHT, ArrowUpRight);
