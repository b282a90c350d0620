//! Outside-click dismissal for popup containers.
//!
//! A click anywhere on the page closes open popups unless the click target
//! sits inside an element carrying the `popup-container` class.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

#[cfg(any(test, feature = "hydrate"))]
use leptos::prelude::*;

pub const POPUP_CONTAINER_CLASS: &str = "popup-container";

/// Whether any of the given `class` attribute values (target first, then
/// its ancestors) marks a popup container.
pub fn is_inside_popup<'a>(class_lists: impl IntoIterator<Item = &'a str>) -> bool {
    class_lists
        .into_iter()
        .any(|classes| classes.split_whitespace().any(|c| c == POPUP_CONTAINER_CLASS))
}

/// Apply one window click to the popup flag. Returns true when the popup
/// was closed. A flag whose owner is already gone is left alone.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn close_on_outside_click<'a>(open: RwSignal<bool>, class_lists: impl IntoIterator<Item = &'a str>) -> bool {
    if is_inside_popup(class_lists) || open.try_get_untracked() != Some(true) {
        return false;
    }
    open.try_set(false).is_none()
}

/// Close `open` on every window click that lands outside a popup container.
/// The listener is removed when the calling component is cleaned up.
#[cfg(feature = "hydrate")]
pub fn install_outside_click_close(open: RwSignal<bool>) {
    use wasm_bindgen::JsCast;

    let handle = window_event_listener(leptos::ev::click, move |ev| {
        let mut classes = Vec::new();
        let mut node = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        while let Some(el) = node {
            classes.push(el.class_name());
            node = el.parent_element();
        }
        close_on_outside_click(open, classes.iter().map(String::as_str));
    });
    on_cleanup(move || handle.remove());
}
