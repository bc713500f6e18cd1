//! Bindings to the effect libraries loaded by the host page.
//!
//! Each library is reached through `js-sys` reflection on `window`, like an
//! optional capability: a missing global or a throwing call produces a
//! [`LibraryError`], which [`init_all`] logs before moving on to the next
//! library. The page never fails because a script tag did not load.
//!
//! - [`smooth_scroll`] - Eased page scrolling and in-page anchor handling
//! - [`scroll_reveal`] - Fade-in of sections as they enter the viewport
//! - [`typing`] - Typed hero tagline
//! - [`background`] - Animated network background
//! - [`text_reveal`] - Per-character heading reveal

pub mod background;
pub mod scroll_reveal;
pub mod smooth_scroll;
pub mod text_reveal;
pub mod typing;

use folio_core::effects::{DeviceClass, TypingScript};
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::LibraryError;

/// Start every effect library, logging and skipping the ones that fail.
pub fn init_all(device: DeviceClass, script: &TypingScript) {
    report("smooth scroll", smooth_scroll::install());
    report("background", background::init(device));
    report("scroll reveal", scroll_reveal::init());
    report("typing effect", typing::start(script));
    report("text reveal", text_reveal::init());
}

fn report(feature: &str, result: Result<(), LibraryError>) {
    match result {
        Ok(()) => {}
        Err(LibraryError::Missing(name)) => {
            leptos::logging::warn!("{feature} disabled: {name} is not loaded");
        }
        Err(e) => {
            leptos::logging::error!("{feature} initialization failed: {e}");
        }
    }
}

// ============================================================================
// Reflection Helpers
// ============================================================================

/// Look up a global (`window[name]`), failing if it is undefined.
fn global(name: &'static str) -> Result<JsValue, LibraryError> {
    let value =
        Reflect::get(&js_sys::global(), &name.into()).map_err(|e| LibraryError::call(name, &e))?;
    if value.is_undefined() || value.is_null() {
        return Err(LibraryError::Missing(name));
    }
    Ok(value)
}

/// Look up a property, failing if it is undefined.
fn property(target: &JsValue, name: &'static str) -> Result<JsValue, LibraryError> {
    let value = Reflect::get(target, &name.into()).map_err(|e| LibraryError::call(name, &e))?;
    if value.is_undefined() {
        return Err(LibraryError::Missing(name));
    }
    Ok(value)
}

/// Call `target[name](...args)` with `target` as `this`.
fn invoke(target: &JsValue, name: &'static str, args: &[JsValue]) -> Result<JsValue, LibraryError> {
    let method = property(target, name)?
        .dyn_into::<Function>()
        .map_err(|v| LibraryError::call(name, &v))?;
    let args: Array = args.iter().collect();
    method
        .apply(target, &args)
        .map_err(|e| LibraryError::call(name, &e))
}

/// `new ctor(...args)`.
fn construct(ctor: JsValue, name: &'static str, args: &[JsValue]) -> Result<JsValue, LibraryError> {
    let ctor = ctor
        .dyn_into::<Function>()
        .map_err(|v| LibraryError::call(name, &v))?;
    let args: Array = args.iter().collect();
    Reflect::construct(&ctor, &args).map_err(|e| LibraryError::call(name, &e))
}

/// Convert an option record to a plain JS object.
fn options<T: Serialize>(value: &T) -> Result<JsValue, LibraryError> {
    Ok(serde_wasm_bindgen::to_value(value)?)
}

/// Set `target[key] = value` on an options object.
fn set(target: &JsValue, key: &str, value: &JsValue) -> Result<(), LibraryError> {
    Reflect::set(target, &key.into(), value)
        .map(|_| ())
        .map_err(|e| LibraryError::call(key.to_string(), &e))
}
