//! Typed hero tagline (TypeIt).

use folio_core::effects::{TypingScript, TypingStep};
use wasm_bindgen::JsValue;

use super::{construct, global, invoke, options};
use crate::config::HERO_TAGLINE_SELECTOR;
use crate::error::LibraryError;
use crate::utils::dom;

/// Queue every step of `script` on the hero tagline and start typing.
///
/// Does nothing when the tagline element is absent or the script is empty.
pub fn start(script: &TypingScript) -> Result<(), LibraryError> {
    if script.is_empty() || dom::query(HERO_TAGLINE_SELECTOR).is_none() {
        return Ok(());
    }

    let ctor = global("TypeIt")?;
    let typer = construct(
        ctor,
        "TypeIt",
        &[HERO_TAGLINE_SELECTOR.into(), options(&script.options)?],
    )?;

    for step in &script.steps {
        let delay = options(&step.delay())?;
        match step {
            TypingStep::Type { text, .. } => {
                invoke(&typer, "type", &[text.as_str().into(), delay])?;
            }
            TypingStep::Delete { .. } => {
                invoke(&typer, "delete", &[JsValue::NULL, delay])?;
            }
        }
    }

    invoke(&typer, "go", &[])?;
    Ok(())
}
