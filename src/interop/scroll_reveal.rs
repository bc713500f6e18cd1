//! Scroll-triggered section reveal (AOS).

use folio_core::effects::ScrollRevealOptions;

use super::{global, invoke, options};
use crate::error::LibraryError;

pub fn init() -> Result<(), LibraryError> {
    let aos = global("AOS")?;
    invoke(&aos, "init", &[options(&ScrollRevealOptions::default())?])?;
    Ok(())
}
