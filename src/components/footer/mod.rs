//! Contact section and footer.

use folio_core::{Profile, SocialLink};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::magnetic::MagneticLink;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn SiteFooter(profile: Profile, socials: Vec<SocialLink>) -> impl IntoView {
    view! {
        <footer id="contact" class=css::footer>
            <h2 class=format!("{} reveal-text", css::heading)>"Let's work together"</h2>
            <p class=css::summary data-aos="fade-up">{profile.summary}</p>

            <div class=css::socials data-aos="fade-up" data-aos-delay="100">
                {socials
                    .into_iter()
                    .map(|social| {
                        let SocialLink { label, href } = social;
                        let external = href.starts_with("http");
                        let aria_label = label.clone();
                        view! {
                            <MagneticLink
                                href=href
                                class=css::social
                                external=external
                                label=aria_label
                            >
                                {label}
                                <Icon icon=ic::ARROW_UP_RIGHT />
                            </MagneticLink>
                        }
                    })
                    .collect_view()}
            </div>

            <p class=css::copyright>{profile.name}</p>
        </footer>
    }
}
