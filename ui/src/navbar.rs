use dioxus::prelude::*;

/// Shared navigation bar. Platform crates fill it with their own links so
/// each can use its own `Route` enum.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            id: "navbar",
            {children}
        }
    }
}
