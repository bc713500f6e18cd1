//! Animated network background (Vanta NET).

use folio_core::effects::{BackgroundConfig, DeviceClass};

use super::{global, invoke, options};
use crate::config::BACKGROUND_SELECTOR;
use crate::error::LibraryError;
use crate::utils::dom;

/// Start the background on its host element, tuned for `device`.
pub fn init(device: DeviceClass) -> Result<(), LibraryError> {
    if dom::query(BACKGROUND_SELECTOR).is_none() {
        return Ok(());
    }

    let vanta = global("VANTA")?;
    // NET is a factory function, called with VANTA as `this`
    let config = BackgroundConfig::for_device(BACKGROUND_SELECTOR, device);
    invoke(&vanta, "NET", &[options(&config)?])?;

    leptos::logging::log!(
        "background started ({})",
        if device.is_touch() { "touch" } else { "desktop" }
    );
    Ok(())
}
