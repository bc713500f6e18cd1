//! "Request access" dialog.
//!
//! Shows which project the visitor asked about and offers two prefilled
//! contact links: a messaging deep link and a `mailto:` link. The dialog
//! closes from its close button, from a click on the dimmed backdrop, or
//! with Escape.

use folio_core::{ContactChannels, ContactModal, DeepLinks};
use gloo_events::EventListener;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/modal/modal.module.css");

#[component]
pub fn RequestModal(channels: ContactChannels) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_open = Signal::derive(move || ctx.modal.with(ContactModal::is_open));
    let project = Signal::derive(move || {
        ctx.modal
            .with(|m| m.project().map(str::to_string))
            .unwrap_or_default()
    });
    // Regenerated whenever a different project is requested
    let links = Memo::new(move |_| {
        ctx.modal
            .with(|m| m.project().map(|p| channels.links_for(p)))
            .unwrap_or_default()
    });

    let _escape = StoredValue::new_local(escape_listener(ctx.modal));

    let on_close = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctx.close_request();
    };
    let on_backdrop = move |ev: MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            ctx.close_request();
        }
    };

    view! {
        <div
            id="request-modal"
            class=move || {
                if is_open.get() {
                    format!("{} {}", css::backdrop, css::open)
                } else {
                    css::backdrop.to_string()
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=on_backdrop
        >
            <div class=css::content on:click=|ev: MouseEvent| ev.stop_propagation()>
                <button
                    type="button"
                    class=css::close
                    aria-label="Close"
                    on:click=on_close
                >
                    <Icon icon=ic::CLOSE />
                </button>

                <h3 class=css::title>"Request a live demo"</h3>
                <p>
                    "Project: "
                    <span class=css::project>{project}</span>
                </p>

                <div class=css::actions>
                    <a
                        class=format!("{} {}", css::action, css::whatsapp)
                        href=move || links.with(|l: &DeepLinks| l.whatsapp.clone())
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <Icon icon=ic::MESSAGE />
                        "Message on WhatsApp"
                    </a>
                    <a
                        class=format!("{} {}", css::action, css::email)
                        href=move || links.with(|l: &DeepLinks| l.email.clone())
                    >
                        <Icon icon=ic::MAIL />
                        "Send an email"
                    </a>
                </div>
            </div>
        </div>
    }
}

/// Escape closes the dialog while it is open and is ignored otherwise.
fn escape_listener(modal: RwSignal<ContactModal>) -> Option<EventListener> {
    let document = dom::document()?;
    Some(EventListener::new(&document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            modal.maybe_update(|m| m.handle_key(&key.key()));
        }
    }))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::{HtmlElement, KeyboardEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let host = dom::document()
            .unwrap()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        dom::body().unwrap().append_child(&host).unwrap();
        host
    }

    fn find(host: &HtmlElement, selector: &str) -> HtmlElement {
        host.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    fn mount(ctx: AppContext) -> (HtmlElement, impl Sized) {
        let host = container();
        let channels = ContactChannels::new("Sam", "15555550123", "hello@example.com");
        let handle = mount_to(host.clone(), move || {
            provide_context(ctx);
            view! { <RequestModal channels=channels /> }
        });
        (host, handle)
    }

    fn is_open(ctx: AppContext) -> bool {
        ctx.modal.with_untracked(ContactModal::is_open)
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        dom::document().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_backdrop_click_closes() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);
        ctx.request_access("Alpha");

        find(&host, "#request-modal").click();
        assert!(!is_open(ctx));

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_click_inside_content_keeps_open() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);
        ctx.request_access("Alpha");

        find(&host, &format!(".{}", css::content)).click();
        assert!(is_open(ctx));
        find(&host, &format!(".{}", css::title)).click();
        assert!(is_open(ctx));
        find(&host, &format!(".{}", css::project)).click();
        assert!(is_open(ctx));

        find(&host, "button[aria-label='Close']").click();
        assert!(!is_open(ctx));

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_only_when_open() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);

        press("Escape");
        assert!(!is_open(ctx));

        ctx.request_access("Alpha");
        press("Enter");
        assert!(is_open(ctx));
        press("Escape");
        assert!(!is_open(ctx));

        drop(handle);
        host.remove();
    }
}
