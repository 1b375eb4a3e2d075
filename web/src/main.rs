use client::state::use_chat_store_provider;
use dioxus::prelude::*;

use ui::Navbar;
use views::{ChatPage, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/chat")]
    ChatPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    server::init_server();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_chat_store_provider();
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link {
                to: Route::Home {},
                "Home"
            }
            Link {
                to: Route::ChatPage {},
                "Chat"
            }
        }

        Outlet::<Route> {}
    }
}
