//! Landing section: name, typed tagline and animated background.
//!
//! The tagline and background elements are empty hosts; the typing and
//! background libraries fill them once the page has mounted.

use folio_core::Profile;
use leptos::prelude::*;

use crate::components::magnetic::MagneticLink;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <header id="top" class=css::hero>
            <div id="vanta-canvas" class=css::background></div>

            <div class=css::content>
                <h1 class=format!("{} reveal-text", css::name)>{profile.name}</h1>
                <p class=css::role data-aos="fade-up">{profile.role}</p>
                <span id="hero-tagline" class=css::tagline></span>

                <div class=css::actions data-aos="fade-up" data-aos-delay="200">
                    <MagneticLink href="#projects" class=css::primary>
                        "View projects"
                    </MagneticLink>
                    <MagneticLink href="#contact" class=css::secondary>
                        "Get in touch"
                    </MagneticLink>
                </div>
            </div>
        </header>
    }
}
