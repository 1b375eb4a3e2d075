use client::state::use_chat_store;
use dioxus::prelude::*;
use shared::ids::new_session_id;

use crate::views::{ChatView, IntroView};

/// Page-level chat view. Generates a session identifier once per mount and
/// shows either the intro or the running chat, depending on whether a
/// session has been established in shared state.
#[component]
pub fn ChatPage() -> Element {
    // One-time initialization: the identifier lives for the mounted
    // lifetime of this page and is regenerated only on remount.
    let session_id = use_hook(new_session_id);

    let store = use_chat_store();
    let is_initialized = store.is_session_initialized();

    rsx! {
        div {
            class: "chat-page",

            if is_initialized {
                ChatView {}
            } else {
                IntroView { session_id }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use client::state::{use_chat_store_provider, ChatStore};
    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::prelude::*;
    use shared::types::SessionInfo;

    use crate::views::ChatPage;

    thread_local! {
        static STORE_HANDLE: RefCell<Option<ChatStore>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness() -> Element {
        let store = use_chat_store_provider();
        STORE_HANDLE.with(|handle| *handle.borrow_mut() = Some(store));
        rsx! {
            ChatPage {}
        }
    }

    fn captured_store() -> ChatStore {
        STORE_HANDLE.with(|handle| (*handle.borrow()).expect("harness not rendered"))
    }

    fn session_id_attr(html: &str) -> Option<String> {
        let (_, rest) = html.split_once("data-session-id=\"")?;
        rest.split_once('"').map(|(id, _)| id.to_owned())
    }

    #[test]
    fn test_intro_shown_with_session_id_before_initialization() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("intro-view"));
        assert!(!html.contains("chat-view"));
        let session_id = session_id_attr(&html).expect("intro carries the session id");
        assert!(!session_id.is_empty());
    }

    #[test]
    fn test_chat_shown_once_session_is_initialized() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();

        dom.in_runtime(|| {
            let mut store = captured_store();
            store.set_session_info(SessionInfo::new("abc", "Dana"));
        });
        dom.render_immediate(&mut NoOpMutations);
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("chat-view"));
        assert!(!html.contains("intro-view"));
    }

    #[test]
    fn test_session_id_survives_variant_switches() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let first_id = session_id_attr(&dioxus_ssr::render(&dom)).unwrap();

        dom.in_runtime(|| {
            let mut store = captured_store();
            store.set_session_info(SessionInfo::new(&first_id, "Dana"));
        });
        dom.render_immediate(&mut NoOpMutations);
        assert!(session_id_attr(&dioxus_ssr::render(&dom)).is_none());

        dom.in_runtime(|| {
            let mut store = captured_store();
            store.clear_session();
        });
        dom.render_immediate(&mut NoOpMutations);
        let second_id = session_id_attr(&dioxus_ssr::render(&dom)).unwrap();

        assert_eq!(first_id, second_id);
    }
}
