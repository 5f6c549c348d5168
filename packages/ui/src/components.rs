//! Small building blocks shared by the screens.

use dioxus::prelude::*;

/// Spinning loading indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner", role: "status",
            span { class: "visually-hidden", "Loading..." }
        }
    }
}

/// Dismissible error banner shown above a screen's content.
#[component]
pub fn Alert(message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div { class: "alert alert-danger",
            span { "{message}" }
            button {
                class: "alert-close",
                onclick: move |_| on_close.call(()),
                "\u{00d7}"
            }
        }
    }
}

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
