//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! page-level effects (scroll lock, effect library startup).

use folio_core::{ContactModal, NavMenu, SiteConfig};
use leptos::prelude::*;

use crate::components::{
    CustomCursor, Hero, Lightbox, NavBar, Projects, RequestModal, SiteFooter, Testimonials,
};
use crate::config::site_config;
use crate::interop;
use crate::utils::dom;

/// Class placed on `<body>` while the mobile menu is open.
const MENU_OPEN_CLASS: &str = "menu-open";

// ============================================================================
// AppContext
// ============================================================================

/// Page-wide reactive state shared by the interactive components.
///
/// All fields are signals, so the context is `Copy` and cheap to capture in
/// event handlers.
///
/// - **Navigation**: mobile menu open state
/// - **Request modal**: which project (if any) the visitor asked about
/// - **Lightbox**: image currently expanded to full screen
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mobile navigation panel.
    pub nav: RwSignal<NavMenu>,

    /// "Request access" modal.
    pub modal: RwSignal<ContactModal>,

    /// Source of the image shown in the full-screen overlay.
    pub lightbox: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            nav: RwSignal::new(NavMenu::new()),
            modal: RwSignal::new(ContactModal::new()),
            lightbox: RwSignal::new(None),
        }
    }

    /// Show the request modal for `project`, replacing any open request.
    pub fn request_access(&self, project: &str) {
        self.modal.update(|m| m.open(project));
    }

    pub fn close_request(&self) {
        self.modal.update(|m| m.close());
    }

    pub fn toggle_nav(&self) {
        self.nav.update(|n| n.toggle());
    }

    pub fn close_nav(&self) {
        // Skips notifying subscribers when already closed
        self.nav.maybe_update(|n| {
            let was_open = n.is_open();
            n.close();
            was_open
        });
    }

    /// Expand `src` to the full-screen overlay.
    pub fn expand_image(&self, src: &str) {
        self.lightbox.set(Some(src.to_string()));
    }

    pub fn close_image(&self) {
        self.lightbox.set(None);
    }

    /// Page scrolling is locked while the menu or the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.nav.with(NavMenu::is_open) || self.modal.with(ContactModal::is_open)
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Parses the embedded site content, surfacing failures through the boundary
/// - Renders the portfolio page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #050505;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                        "This page could not be loaded"
                    </h1>
                    <ul style="color: #a0a0a0; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        >
            {site_config().map(|site| view! { <Portfolio site=site /> })}
        </ErrorBoundary>
    }
}

/// Keep `<body>` scroll lock and the `menu-open` class in step with the
/// menu and the modal.
fn sync_body_state(ctx: AppContext) {
    Effect::new(move || {
        dom::set_scroll_locked(ctx.scroll_locked());
        dom::set_body_class(MENU_OPEN_CLASS, ctx.nav.with(NavMenu::is_open));
    });
}

/// The page body, rendered once the content document is valid.
#[component]
fn Portfolio(site: SiteConfig) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    sync_body_state(ctx);

    // Effect libraries start once, after the page has been rendered
    let script = site.typing_script();
    let libraries_started = StoredValue::new(false);
    Effect::new(move || {
        if !libraries_started.get_value() {
            libraries_started.set_value(true);
            interop::init_all(dom::device_class(), &script);
        }
    });

    let SiteConfig {
        profile,
        contact,
        taglines: _,
        nav,
        projects,
        testimonials,
        socials,
        carousel,
    } = site;

    view! {
        <CustomCursor />
        <NavBar brand=profile.name.clone() links=nav />
        <main>
            <Hero profile=profile.clone() />
            <Projects projects=projects />
            <Testimonials testimonials=testimonials settings=carousel />
        </main>
        <SiteFooter profile=profile socials=socials />
        <RequestModal channels=contact />
        <Lightbox />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_locked_while_either_overlay_is_open() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppContext::new();
        assert!(!ctx.scroll_locked());

        ctx.toggle_nav();
        assert!(ctx.scroll_locked());
        ctx.close_nav();
        assert!(!ctx.scroll_locked());

        ctx.request_access("Alpha");
        assert!(ctx.scroll_locked());
        ctx.close_request();
        assert!(!ctx.scroll_locked());
    }

    #[test]
    fn test_closing_one_overlay_keeps_lock_for_the_other() {
        let owner = Owner::new();
        owner.set();

        let ctx = AppContext::new();
        ctx.toggle_nav();
        ctx.request_access("Alpha");

        // Menu is still open behind the modal
        ctx.close_request();
        assert!(ctx.scroll_locked());
        ctx.close_nav();
        assert!(!ctx.scroll_locked());

        ctx.request_access("Beta");
        ctx.toggle_nav();
        ctx.close_nav();
        assert!(ctx.scroll_locked());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use folio_core::{ContactChannels, NavLink};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TOGGLE: &str = "button[aria-label='Toggle navigation']";
    const NAV_LINK: &str = "nav a[href='#work']";
    const MODAL_CLOSE: &str = "#request-modal button[aria-label='Close']";

    fn container() -> HtmlElement {
        let document = dom::document().unwrap();
        let host = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        dom::body().unwrap().append_child(&host).unwrap();
        host
    }

    fn click(selector: &str) {
        dom::query(selector)
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
    }

    /// Let pending effects run.
    async fn settle() {
        TimeoutFuture::new(0).await;
    }

    fn body_state() -> (String, bool) {
        let body = dom::body().unwrap();
        let overflow = body.style().get_property_value("overflow").unwrap();
        (overflow, body.class_list().contains(MENU_OPEN_CLASS))
    }

    #[wasm_bindgen_test]
    async fn test_body_follows_menu_and_modal() {
        let ctx = AppContext::new();
        let channels = ContactChannels::new("Sam", "15555550123", "hello@example.com");
        let host = container();
        let handle = mount_to(host.clone(), move || {
            provide_context(ctx);
            sync_body_state(ctx);
            view! {
                <NavBar
                    brand="Sam".to_string()
                    links=vec![NavLink { label: "Work".into(), href: "#work".into() }]
                />
                <RequestModal channels=channels />
            }
        });
        settle().await;
        assert_eq!(body_state(), (String::new(), false));

        click(TOGGLE);
        settle().await;
        assert_eq!(body_state(), ("hidden".to_string(), true));

        click(NAV_LINK);
        settle().await;
        assert!(!ctx.nav.with_untracked(NavMenu::is_open));
        assert_eq!(body_state(), (String::new(), false));

        // Modal closes while the menu stays open underneath
        click(TOGGLE);
        ctx.request_access("Alpha");
        settle().await;
        assert_eq!(body_state(), ("hidden".to_string(), true));
        click(MODAL_CLOSE);
        settle().await;
        assert!(!ctx.modal.with_untracked(ContactModal::is_open));
        assert_eq!(body_state(), ("hidden".to_string(), true));

        click(TOGGLE);
        settle().await;
        assert_eq!(body_state(), (String::new(), false));

        drop(handle);
        host.remove();
    }
}
