//! Floating scroll-to-top button.
//!
//! Appears after the page has been scrolled past a threshold, or when the
//! visitor reaches the bottom of the page (where it pulses). Clicking it
//! (or pressing Home) smooth-scrolls back to the top.

use icondata::BsArrowUp;
use leptos::{ev, html::button, prelude::*};

const SHOW_AFTER_PX: f64 = 500.0;
const NEAR_BOTTOM_PX: f64 = 100.0;

/// Visibility and pulse state for a scroll position. The button shows past
/// the threshold or near the page bottom; it pulses only near the bottom.
fn button_state(offset: f64, viewport: f64, page_height: f64) -> (bool, bool) {
    let near_bottom = offset + viewport >= page_height - NEAR_BOTTOM_PX;
    (offset > SHOW_AFTER_PX || near_bottom, near_bottom)
}

pub fn component() -> impl IntoView {
    let visible = RwSignal::new(false);
    let pulse = RwSignal::new(false);

    // Window listeners are registered from an effect so they only exist on
    // the client.
    Effect::new(move |_| {
        window_event_listener(ev::scroll, move |_| {
            let offset = window().page_y_offset().unwrap_or_default();
            let viewport = window()
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or_default();
            let page_height = document()
                .document_element()
                .map_or(0.0, |root| f64::from(root.scroll_height()));

            let (show, near_bottom) = button_state(offset, viewport, page_height);
            visible.set(show);
            pulse.set(near_bottom);
        });

        window_event_listener(ev::keydown, move |event| {
            if event.key() == "Home" {
                event.prevent_default();
                scroll_to_top();
            }
        });
    });

    button()
        .id("scroll-to-top")
        .class("flex fixed right-6 bottom-20 z-20 justify-center items-center w-12 h-12 text-black rounded-full shadow-lg transition-opacity duration-300 cursor-pointer bg-[#ffef5c]")
        .class(("hidden", move || !visible.get()))
        .class(("animate-pulse", move || pulse.get()))
        .attr("aria-label", "Volver arriba")
        .on(ev::click, |_| scroll_to_top())
        .child(crate::media::icon(BsArrowUp, "size-5"))
}

fn scroll_to_top() {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}
