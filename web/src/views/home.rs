use dioxus::prelude::*;
use ui::Hero;

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = navigator();
    nav.replace(Route::ChatPage {});

    rsx! {
        Hero {}
    }
}
