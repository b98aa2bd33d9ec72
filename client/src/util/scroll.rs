//! Keeping chat transcripts pinned to their newest message.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use leptos::prelude::*;

/// How close to the bottom (in CSS px) still counts as "at the bottom".
pub const NEAR_BOTTOM_THRESHOLD_PX: i32 = 80;

/// Whether a scroll container with these metrics shows its last line.
#[must_use]
pub fn is_near_bottom(scroll_height: i32, scroll_top: i32, client_height: i32) -> bool {
    scroll_height - scroll_top <= client_height + NEAR_BOTTOM_THRESHOLD_PX
}

/// [`is_near_bottom`] for a mounted container. Unmounted containers (and
/// SSR) count as at the bottom.
pub fn container_near_bottom(container: NodeRef<leptos::html::Div>) -> bool {
    #[cfg(feature = "hydrate")]
    {
        container
            .get_untracked()
            .map_or(true, |el| is_near_bottom(el.scroll_height(), el.scroll_top(), el.client_height()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = container;
        true
    }
}

/// Scroll `container` to its bottom edge, animating when `smooth`.
pub fn scroll_to_bottom(container: NodeRef<leptos::html::Div>, smooth: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = container.get_untracked() else {
            log::warn!("transcript container not mounted; skipping scroll");
            return;
        };
        let top = f64::from(el.scroll_height());
        if smooth {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_to_with_scroll_to_options(&options);
        } else {
            el.set_scroll_top(el.scroll_height());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (container, smooth);
    }
}
