//! Buttons and links that lean toward the pointer.

use folio_core::{Magnet, MagnetField, Point};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::config::{MAGNET_MAX_OFFSET_PX, MAGNET_RADIUS_PX};
use crate::utils::dom;

const FIELD: MagnetField = MagnetField {
    radius: MAGNET_RADIUS_PX,
    max_offset: MAGNET_MAX_OFFSET_PX,
};

/// Magnetic state of one element and its pointer handlers.
#[derive(Clone, Copy)]
struct MagnetHandle {
    state: RwSignal<Magnet>,
}

impl MagnetHandle {
    fn new() -> Self {
        Self {
            state: RwSignal::new(Magnet::Idle),
        }
    }

    fn track(&self, ev: &MouseEvent) {
        let Some(element) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<Element>().ok())
        else {
            return;
        };
        let center = dom::element_center(&element);
        let pointer = Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
        self.state.maybe_update(|m| m.track(&FIELD, center, pointer));
    }

    fn release(&self) {
        self.state.maybe_update(Magnet::release);
    }

    fn transform(&self) -> String {
        self.state.with(Magnet::transform)
    }

    fn transition(&self) -> &'static str {
        self.state.with(Magnet::transition)
    }
}

/// Magnetic `<a>`.
///
/// External links open in a new tab.
#[component]
pub fn MagneticLink(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] external: bool,
    #[prop(optional)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    let magnet = MagnetHandle::new();

    view! {
        <a
            class=class
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-label=label
            style:transform=move || magnet.transform()
            style:transition=move || magnet.transition()
            on:mousemove=move |ev| magnet.track(&ev)
            on:mouseleave=move |_| magnet.release()
        >
            {children()}
        </a>
    }
}

/// Magnetic `<button>`.
#[component]
pub fn MagneticButton(
    #[prop(into)] on_click: Callback<()>,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] label: Option<String>,
    children: Children,
) -> impl IntoView {
    let magnet = MagnetHandle::new();

    view! {
        <button
            type="button"
            class=class
            aria-label=label
            style:transform=move || magnet.transform()
            style:transition=move || magnet.transition()
            on:mousemove=move |ev| magnet.track(&ev)
            on:mouseleave=move |_| magnet.release()
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_click.run(());
            }
        >
            {children()}
        </button>
    }
}
