//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Lookups return `None`
//! when the page lacks the element, so callers can skip features quietly.

use folio_core::Point;
use folio_core::effects::DeviceClass;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::config::COARSE_DEVICE_QUERY;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get `<body>`.
#[inline]
pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

/// First element matching `selector`, if any.
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` under `root` (or the whole document).
pub fn query_all(root: Option<&Element>, selector: &str) -> Vec<Element> {
    let list = match root {
        Some(root) => root.query_selector_all(selector).ok(),
        None => document().and_then(|d| d.query_selector_all(selector).ok()),
    };
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Whether a media query currently matches.
pub fn matches_media(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|list| list.matches())
}

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Centre of the viewport, where the custom cursor starts.
pub fn viewport_center() -> Point {
    viewport_size()
        .map(|(w, h)| Point::new(w / 2.0, h / 2.0))
        .unwrap_or_default()
}

/// Classify the current device once, at load time.
pub fn device_class() -> DeviceClass {
    let coarse = matches_media(COARSE_DEVICE_QUERY);
    let width = viewport_size().map(|(w, _)| w).unwrap_or_default();
    DeviceClass::detect(coarse, width)
}

/// Centre of an element's bounding box in client coordinates.
pub fn element_center(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(
        rect.left() + rect.width() / 2.0,
        rect.top() + rect.height() / 2.0,
    )
}

/// Whether the event hit the listening element itself rather than a child.
///
/// Backdrop clicks are recognised this way.
pub fn is_backdrop_click(event: &Event) -> bool {
    let target: Option<JsValue> = event.target().map(Into::into);
    let current: Option<JsValue> = event.current_target().map(Into::into);
    target.is_some() && target == current
}

// =============================================================================
// Body State
// =============================================================================

/// Lock or restore page scrolling.
pub fn set_scroll_locked(locked: bool) {
    if let Some(body) = body() {
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, present: bool) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle_with_force(class, present);
    }
}

/// Override the native pointer glyph, or restore it with `None`.
pub fn set_body_cursor(cursor: Option<&str>) {
    if let Some(body) = body() {
        let _ = body.style().set_property("cursor", cursor.unwrap_or(""));
    }
}

// =============================================================================
// Scrolling
// =============================================================================

/// Native smooth scroll, used when the smooth-scroll library is unavailable.
pub fn scroll_into_view_smooth(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
