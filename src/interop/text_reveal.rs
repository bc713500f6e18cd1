//! Per-character heading reveal (GSAP with its ScrollTrigger plugin).

use folio_core::effects::{TextReveal, split_glyphs};
use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use super::{global, invoke, options, property, set};
use crate::config::REVEAL_TEXT_SELECTOR;
use crate::error::{DomError, LibraryError};
use crate::utils::dom;

/// Split every reveal heading into glyph spans and attach its tween.
pub fn init() -> Result<(), LibraryError> {
    let gsap = global("gsap")?;
    let trigger_plugin = global("ScrollTrigger")?;
    invoke(&gsap, "registerPlugin", &[trigger_plugin])?;

    let document = dom::document().ok_or(DomError::NoDocument)?;
    let reveal = TextReveal::default();

    for element in dom::query_all(None, REVEAL_TEXT_SELECTOR) {
        let glyphs = split_into_spans(&document, &element)?;
        if glyphs.length() == 0 {
            continue;
        }

        invoke(&gsap, "set", &[glyphs.clone().into(), options(&reveal.from)?])?;

        let tween = options(&reveal.tween)?;
        let scroll_trigger = property(&tween, "scrollTrigger")?;
        set(&scroll_trigger, "trigger", &element)?;
        invoke(&gsap, "to", &[glyphs.into(), tween])?;
    }

    Ok(())
}

/// Replace the element's text with one inline-block span per character.
fn split_into_spans(document: &Document, element: &Element) -> Result<Array, DomError> {
    let text = element.text_content().unwrap_or_default();
    element.set_text_content(None);

    let spans = Array::new();
    for glyph in split_glyphs(&text) {
        let span: HtmlElement = document.create_element("span")?.unchecked_into();
        span.set_text_content(Some(&glyph));
        span.style().set_property("display", "inline-block")?;
        element.append_child(&span)?;
        spans.push(&JsValue::from(span));
    }
    Ok(spans)
}
