use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        div {
            id: "hero",

            h1 { "Kestrel" }
            p { "A small coaching chat. Your conversation starts in a moment." }
        }
    }
}
