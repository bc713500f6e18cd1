//! Testimonial carousel.
//!
//! One slide is visible at a time. Previous/next controls and indicator dots
//! only appear when there is more than one testimonial; the arrow keys page
//! through the slides from anywhere on the page.

use folio_core::{Carousel, CarouselSettings, Testimonial};
use gloo_events::EventListener;
use gloo_timers::callback::Interval;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/testimonials/testimonials.module.css");

#[component]
pub fn Testimonials(testimonials: Vec<Testimonial>, settings: CarouselSettings) -> impl IntoView {
    // Nothing to page through: the section is left out entirely
    let Some(carousel) = Carousel::new(testimonials.len()) else {
        return ().into_any();
    };
    let state = RwSignal::new(carousel);
    let has_controls = carousel.has_controls();

    // Listener and timer are dropped with this component's owner
    let _keys = StoredValue::new_local(arrow_keys(state));
    let _autoplay = StoredValue::new_local(
        settings
            .autoplay_ms
            .filter(|_| has_controls)
            .map(|ms| {
                Interval::new(ms, move || {
                    let _ = state.try_update(Carousel::next);
                })
            }),
    );

    let slides = testimonials
        .into_iter()
        .enumerate()
        .map(|(i, testimonial)| {
            view! {
                <figure
                    class=move || with_active(css::slide, state.with(|c| c.is_active(i)))
                    aria-hidden=move || (!state.with(|c| c.is_active(i))).to_string()
                >
                    <blockquote class=css::quote>{testimonial.quote}</blockquote>
                    <figcaption>
                        <span class=css::author>{testimonial.author}</span>
                        " "
                        <span class=css::role>{testimonial.role}</span>
                    </figcaption>
                </figure>
            }
        })
        .collect_view();

    let controls = has_controls.then(|| {
        view! {
            <button
                type="button"
                class=format!("{} {}", css::control, css::prev)
                aria-label="Previous testimonial"
                on:click=move |_: MouseEvent| state.update(Carousel::prev)
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>
            <button
                type="button"
                class=format!("{} {}", css::control, css::next)
                aria-label="Next testimonial"
                on:click=move |_: MouseEvent| state.update(Carousel::next)
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        }
    });

    let dots = has_controls.then(|| {
        let count = carousel.slide_count();
        view! {
            <div class=css::dots>
                {(0..count)
                    .map(|i| view! {
                        <button
                            type="button"
                            class=move || with_active(css::dot, state.with(|c| c.is_active(i)))
                            aria-label=format!("Show testimonial {}", i + 1)
                            on:click=move |_: MouseEvent| {
                                state.update(|c| c.go_to(i as isize));
                            }
                        ></button>
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <section id="testimonials" class=css::section data-aos="fade-up">
            <h2 class=format!("{} reveal-text", css::heading)>"Testimonials"</h2>
            <div class=css::viewport>
                <div
                    class=css::track
                    style:transform=move || state.with(Carousel::track_transform)
                >
                    {slides}
                </div>
                {controls}
            </div>
            {dots}
        </section>
    }
    .into_any()
}

fn with_active(base: &str, active: bool) -> String {
    if active {
        format!("{} {}", base, css::active)
    } else {
        base.to_string()
    }
}

/// ArrowLeft / ArrowRight page the carousel regardless of focus.
fn arrow_keys(state: RwSignal<Carousel>) -> Option<EventListener> {
    let document = dom::document()?;
    Some(EventListener::new(&document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        match key.key().as_str() {
            "ArrowLeft" => {
                let _ = state.try_update(Carousel::prev);
            }
            "ArrowRight" => {
                let _ = state.try_update(Carousel::next);
            }
            _ => {}
        }
    }))
}
