//! Eased page scrolling (Lenis) and in-page anchor navigation.

use std::ops::ControlFlow;

use folio_core::effects::{SmoothScrollOptions, anchor_target};
use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use super::{construct, global, invoke, options};
use crate::error::{DomError, LibraryError};
use crate::utils::{animation_loop, dom};

/// Start the smooth-scroll driver and route anchor clicks through it.
///
/// Anchor handling is installed even when the library is missing; those
/// links then fall back to native smooth scrolling and the missing driver
/// is still reported.
pub fn install() -> Result<(), LibraryError> {
    let driver = start_driver();
    delegate_anchor_clicks(driver.as_ref().ok().cloned())?;
    driver.map(|_| ())
}

fn start_driver() -> Result<JsValue, LibraryError> {
    let ctor = global("Lenis")?;
    let lenis = construct(ctor, "Lenis", &[options(&SmoothScrollOptions::default())?])?;

    let ticking = lenis.clone();
    animation_loop(move |time| {
        if let Err(e) = invoke(&ticking, "raf", &[JsValue::from_f64(time)]) {
            leptos::logging::error!("smooth scroll stopped: {e}");
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });

    Ok(lenis)
}

fn delegate_anchor_clicks(driver: Option<JsValue>) -> Result<(), DomError> {
    let document = dom::document().ok_or(DomError::NoDocument)?;

    EventListener::new(&document, "click", move |event| {
        let Some(anchor) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(selector) = anchor_target(&href) else {
            return;
        };

        event.prevent_default();
        let Some(target) = dom::query(selector) else {
            return;
        };
        scroll_to(driver.as_ref(), &target);
    })
    .forget();

    Ok(())
}

fn scroll_to(driver: Option<&JsValue>, target: &Element) {
    let scrolled = driver.is_some_and(|lenis| {
        invoke(lenis, "scrollTo", &[JsValue::from(target.clone())]).is_ok()
    });
    if !scrolled {
        dom::scroll_into_view_smooth(target);
    }
}
