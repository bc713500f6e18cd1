//! Project cards.
//!
//! Each card hides its dashboard behind the project logo. The first click on
//! the media reveals the dashboard in place with a short flash; every later
//! click expands it to the full-screen overlay. Cards also carry a pointer
//! glow and a "request access" button that opens the contact modal.

use folio_core::{MediaReveal, Project, RevealAction};
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::magnetic::MagneticButton;
use crate::config::REVEAL_FLASH_MS;

stylance::import_crate_style!(css, "src/components/projects/projects.module.css");

#[component]
pub fn Projects(projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id="projects" class=css::section>
            <h2 class=format!("{} reveal-text", css::heading)>"Projects"</h2>
            <div class=css::grid>
                {projects
                    .into_iter()
                    .map(|project| view! { <ProjectCard project=project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let Project {
        name,
        summary,
        logo,
        dashboard,
        tags,
    } = project;

    let reveal = RwSignal::new(MediaReveal::new());
    let flashing = RwSignal::new(false);
    let revealed = Signal::derive(move || reveal.with(MediaReveal::is_revealed));

    let expand_src = dashboard.clone();
    let on_media_click = move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        match reveal.try_update(MediaReveal::click) {
            Some(RevealAction::Reveal) => play_flash(flashing),
            Some(RevealAction::Expand) => ctx.expand_image(&expand_src),
            None => {}
        }
    };

    let requested = name.clone();
    let on_request = Callback::new(move |_: ()| ctx.request_access(&requested));

    let media_label = format!("Show the {} dashboard", name);
    let logo_alt = format!("{} logo", name);
    let dashboard_alt = format!("{} dashboard", name);

    view! {
        <article
            class=css::card
            data-aos="fade-up"
            on:mousemove=move |ev: MouseEvent| {
                if let Some((card, x, y)) = glow_point(&ev) {
                    set_glow(&card, x, y);
                }
            }
            on:mouseleave=move |ev: MouseEvent| {
                if let Some(card) = card_element(&ev) {
                    let rect = card.get_bounding_client_rect();
                    set_glow(&card, rect.width() / 2.0, rect.height() / 2.0);
                }
            }
        >
            <div class=css::glow></div>

            <div
                class=move || {
                    if revealed.get() {
                        format!("{} {}", css::media, css::revealed)
                    } else {
                        css::media.to_string()
                    }
                }
                data-cursor="expand"
                role="button"
                aria-label=media_label
                on:click=on_media_click
            >
                <img class=css::logo src=logo alt=logo_alt />
                <img class=css::dashboard src=dashboard alt=dashboard_alt />
                <Show when=move || flashing.get()>
                    <div class=css::flash></div>
                </Show>
                <span class=css::hint>
                    {move || if revealed.get() {
                        view! { <Icon icon=ic::EXPAND /> "Expand" }.into_any()
                    } else {
                        view! { <Icon icon=ic::LOCK /> "Reveal" }.into_any()
                    }}
                </span>
            </div>

            <h3 class=css::name>{name}</h3>
            <p class=css::summary>{summary}</p>
            <ul class=css::tags>
                {tags
                    .into_iter()
                    .map(|tag| view! { <li class=css::tag>{tag}</li> })
                    .collect_view()}
            </ul>

            <MagneticButton class=css::request on_click=on_request>
                <Icon icon=ic::LOCK />
                "Request access"
            </MagneticButton>
        </article>
    }
}

/// Show the flash layer until its fade-out has finished.
fn play_flash(flashing: RwSignal<bool>) {
    flashing.set(true);
    spawn_local(async move {
        TimeoutFuture::new(REVEAL_FLASH_MS).await;
        // The card may have been unmounted meanwhile
        let _ = flashing.try_set(false);
    });
}

fn card_element(ev: &MouseEvent) -> Option<HtmlElement> {
    ev.current_target()?.dyn_into::<HtmlElement>().ok()
}

/// Pointer position relative to the card.
fn glow_point(ev: &MouseEvent) -> Option<(HtmlElement, f64, f64)> {
    let card = card_element(ev)?;
    let rect = card.get_bounding_client_rect();
    let x = f64::from(ev.client_x()) - rect.left();
    let y = f64::from(ev.client_y()) - rect.top();
    Some((card, x, y))
}

fn set_glow(card: &HtmlElement, x: f64, y: f64) {
    let style = card.style();
    let _ = style.set_property("--x", &format!("{}px", x));
    let _ = style.set_property("--y", &format!("{}px", y));
}
