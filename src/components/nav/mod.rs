//! Top navigation bar with the collapsible mobile panel.
//!
//! On narrow viewports the links live in a full-screen panel opened by the
//! toggle. The panel closes when the toggle is clicked again, when a link is
//! followed, or when the blurred backdrop around the links is clicked.

use folio_core::{NavLink, NavMenu};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

#[component]
pub fn NavBar(brand: String, links: Vec<NavLink>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let is_open = Signal::derive(move || ctx.nav.with(NavMenu::is_open));
    let marked = move |base: &str| {
        match ctx.nav.with(NavMenu::active_class) {
            Some(marker) => format!("{} {}", base, marker),
            None => base.to_string(),
        }
    };

    let on_toggle = move |_: MouseEvent| ctx.toggle_nav();
    let on_panel_click = move |ev: MouseEvent| {
        if dom::is_backdrop_click(&ev) {
            ctx.close_nav();
        }
    };

    view! {
        <nav class=css::bar>
            <a class=css::brand href="#top">{brand}</a>

            <button
                type="button"
                class=move || marked(css::toggle)
                aria-label="Toggle navigation"
                aria-expanded=move || is_open.get().to_string()
                on:click=on_toggle
            >
                {move || if is_open.get() {
                    view! { <Icon icon=ic::CLOSE /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MENU /> }.into_any()
                }}
            </button>

            <div class=move || marked(css::panel) on:click=on_panel_click>
                <ul class=css::links>
                    {links
                        .into_iter()
                        .map(|link| view! {
                            <li>
                                <a
                                    class=css::link
                                    href=link.href
                                    on:click=move |_| ctx.close_nav()
                                >
                                    {link.label}
                                </a>
                            </li>
                        })
                        .collect_view()}
                </ul>
            </div>
        </nav>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use web_sys::HtmlElement;

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
        let handle = mount_to(host.clone(), move || {
            provide_context(ctx);
            view! {
                <NavBar
                    brand="Sam".to_string()
                    links=vec![
                        NavLink { label: "Work".into(), href: "#work".into() },
                        NavLink { label: "Contact".into(), href: "#contact".into() },
                    ]
                />
            }
        });
        (host, handle)
    }

    fn is_open(ctx: AppContext) -> bool {
        ctx.nav.with_untracked(NavMenu::is_open)
    }

    #[wasm_bindgen_test]
    async fn test_toggle_marks_panel_active() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);
        let panel = format!(".{}", css::panel);

        find(&host, "button").click();
        assert!(is_open(ctx));
        TimeoutFuture::new(0).await;
        assert!(find(&host, &panel).class_list().contains("active"));
        assert_eq!(
            find(&host, "button").get_attribute("aria-expanded").as_deref(),
            Some("true")
        );

        find(&host, "button").click();
        assert!(!is_open(ctx));
        TimeoutFuture::new(0).await;
        assert!(!find(&host, &panel).class_list().contains("active"));

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_backdrop_click_closes_but_link_list_does_not() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);
        ctx.toggle_nav();

        find(&host, &format!(".{}", css::links)).click();
        assert!(is_open(ctx));
        find(&host, "li").click();
        assert!(is_open(ctx));

        find(&host, &format!(".{}", css::panel)).click();
        assert!(!is_open(ctx));

        drop(handle);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_link_click_closes_menu() {
        let ctx = AppContext::new();
        let (host, handle) = mount(ctx);
        ctx.toggle_nav();

        find(&host, "a[href='#contact']").click();
        assert!(!is_open(ctx));

        // Following a link with the menu closed leaves it closed
        find(&host, "a[href='#work']").click();
        assert!(!is_open(ctx));

        drop(handle);
        host.remove();
    }
}
