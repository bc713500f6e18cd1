//! Full-screen image viewer driven by `AppContext::lightbox`.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::utils::Overlay;

/// Keeps at most one [`Overlay`] alive, matching the lightbox signal.
///
/// The live overlay is the effect's own state: it is replaced when a
/// different image is requested and dropped (removing its elements and
/// listeners) when the signal clears or the component unmounts.
#[component]
pub fn Lightbox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    Effect::new(move |current: Option<Option<Overlay>>| {
        let requested = ctx.lightbox.get();
        let current = current.flatten();

        let unchanged = matches!(
            (&current, &requested),
            (Some(overlay), Some(src)) if overlay.image_src() == src
        );
        if unchanged {
            return current;
        }
        if let Some(overlay) = current {
            overlay.dispose();
        }

        let src = requested?;
        match Overlay::open(&src, move || ctx.close_image()) {
            Ok(overlay) => Some(overlay),
            Err(e) => {
                leptos::logging::error!("failed to open image overlay: {e}");
                ctx.close_image();
                None
            }
        }
    });
}
