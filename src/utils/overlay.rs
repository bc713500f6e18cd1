//! Full-screen image overlay.
//!
//! [`Overlay::open`] builds the overlay and its close button directly under
//! `<body>`, so it renders above every stacking context on the page, and
//! registers its dismissal listeners. The returned handle owns all of it:
//! dropping the handle (or calling [`Overlay::dispose`]) removes both
//! elements and every listener, so repeated open/close cycles leave nothing
//! behind.

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, KeyboardEvent};

use crate::config::OVERLAY_FADE_DELAY_MS;
use crate::error::DomError;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/utils/overlay.module.css");

/// A live overlay showing one image.
pub struct Overlay {
    image_src: String,
    root: HtmlElement,
    close_button: HtmlElement,
    _listeners: Vec<EventListener>,
    _fade_in: Timeout,
}

impl Overlay {
    /// Show `image_src` full-screen.
    ///
    /// `on_dismiss` runs when the close button, the backdrop or the Escape
    /// key is used. It should arrange for this handle to be dropped; the
    /// overlay does not remove itself.
    pub fn open<F>(image_src: &str, on_dismiss: F) -> Result<Self, DomError>
    where
        F: Fn() + Clone + 'static,
    {
        let document = dom::document().ok_or(DomError::NoDocument)?;
        let body = document.body().ok_or(DomError::NoBody)?;

        let root: HtmlElement = document.create_element("div")?.unchecked_into();
        root.set_class_name(css::overlay);

        let image = document.create_element("img")?;
        image.set_class_name(css::image);
        image.set_attribute("src", image_src)?;
        image.set_attribute("alt", "Project dashboard")?;
        root.append_child(&image)?;

        let close_button: HtmlElement = document.create_element("button")?.unchecked_into();
        close_button.set_class_name(css::closeButton);
        close_button.set_attribute("type", "button")?;
        close_button.set_attribute("aria-label", "Close")?;
        close_button.set_text_content(Some("\u{d7}"));

        let mut listeners = Vec::with_capacity(3);

        let dismiss = on_dismiss.clone();
        listeners.push(EventListener::new(&close_button, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            dismiss();
        }));

        let dismiss = on_dismiss.clone();
        let backdrop: JsValue = root.clone().into();
        listeners.push(EventListener::new(&root, "click", move |event| {
            let target: Option<JsValue> = event.target().map(Into::into);
            if target.as_ref() == Some(&backdrop) {
                dismiss();
            }
        }));

        let dismiss = on_dismiss;
        listeners.push(EventListener::new(&document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape {
                dismiss();
            }
        }));

        let fading = root.clone();
        let fade_in = Timeout::new(OVERLAY_FADE_DELAY_MS, move || {
            let _ = fading.class_list().add_1(css::visible);
        });

        let overlay = Self {
            image_src: image_src.to_string(),
            root,
            close_button,
            _listeners: listeners,
            _fade_in: fade_in,
        };

        // Built before insertion: a failed append drops the handle and cleans up.
        body.append_child(&overlay.root)?;
        body.append_child(&overlay.close_button)?;

        Ok(overlay)
    }

    /// Image this overlay is showing.
    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    /// Close the overlay, removing its elements and listeners.
    pub fn dispose(self) {}
}

impl Drop for Overlay {
    fn drop(&mut self) {
        self.root.remove();
        self.close_button.remove();
    }
}
