//! Custom cursor that trails the pointer.
//!
//! The ring eases toward the pointer on every animation frame and grows while
//! the pointer is over a link, a button or anything marked `data-cursor`.
//! It is only mounted on fine-pointer, wide-viewport devices.

use std::ops::ControlFlow;

use folio_core::{CursorFollow, Point};
use gloo_events::EventListener;
use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use crate::config::{COARSE_DEVICE_QUERY, CURSOR_EASE, INTERACTIVE_SELECTOR};
use crate::utils::{animation_loop, dom};

stylance::import_crate_style!(css, "src/components/cursor/cursor.module.css");

#[component]
pub fn CustomCursor() -> impl IntoView {
    let coarse = use_media_query(COARSE_DEVICE_QUERY);

    view! {
        <Show when=move || !coarse.get()>
            <CursorRing />
        </Show>
    }
}

#[component]
fn CursorRing() -> impl IntoView {
    let ring_ref = NodeRef::<leptos::html::Div>::new();
    let expanded = RwSignal::new(false);
    let follow = StoredValue::new(CursorFollow::new(dom::viewport_center(), CURSOR_EASE));

    // Released together with this component's owner
    let _listeners = StoredValue::new_local(pointer_listeners(follow, expanded));

    dom::set_body_cursor(Some("none"));
    on_cleanup(|| dom::set_body_cursor(None));

    animation_loop(move |_| {
        // Stops once the component is gone
        let Some(position) = follow.try_update_value(CursorFollow::tick) else {
            return ControlFlow::Break(());
        };
        if let Some(ring) = ring_ref.try_get_untracked().flatten() {
            let _ = web_sys::HtmlElement::style(&ring).set_property(
                "transform",
                &format!(
                    "translate3d({}px, {}px, 0) translate(-50%, -50%)",
                    position.x, position.y
                ),
            );
        }
        ControlFlow::Continue(())
    });

    view! {
        <div
            node_ref=ring_ref
            class=move || {
                if expanded.get() {
                    format!("{} {}", css::cursor, css::expanded)
                } else {
                    css::cursor.to_string()
                }
            }
            aria-hidden="true"
        ></div>
    }
}

/// Document listeners that aim the cursor and toggle its expanded state.
fn pointer_listeners(
    follow: StoredValue<CursorFollow>,
    expanded: RwSignal<bool>,
) -> Vec<EventListener> {
    let Some(document) = dom::document() else {
        return Vec::new();
    };

    let aim = EventListener::new(&document, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let target = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            follow.update_value(|f| f.aim(target));
        }
    });

    let hover = EventListener::new(&document, "mouseover", move |event| {
        let interactive = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
            .is_some();
        if expanded.get_untracked() != interactive {
            expanded.set(interactive);
        }
    });

    vec![aim, hover]
}
