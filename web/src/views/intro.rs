use client::state::{use_chat_store, ChatStore};
use dioxus::{logger::tracing::{error, info}, prelude::*};

#[component]
pub fn IntroView(session_id: String) -> Element {
    let mut user_name: Signal<String> = use_signal(String::new);
    let error_message: Signal<Option<String>> = use_signal(|| None);
    let store = use_chat_store();

    let submit_id = session_id.clone();
    rsx! {
        div {
            class: "intro-view",
            "data-session-id": "{session_id}",

            h2 { "Welcome to Kestrel" }
            p { "Tell us your name and we will set up your chat session." }

            if let Some(message) = error_message() {
                div {
                    class: "error-container",
                    p { "{message}" }
                }
            }

            form {
                onsubmit: move |_event| {
                    let session_id = submit_id.clone();
                    let name = user_name();
                    async move {
                        start_session(session_id, name, store, error_message).await;
                    }
                },

                p { "Your name" }
                input {
                    name: "name",
                    maxlength: 32,
                    value: user_name(),
                    oninput: move |event| user_name.set(event.value()),
                }
                button { "Start chat" }
            }
        }
    }
}

async fn start_session(
    session_id: String,
    user_name: String,
    mut store: ChatStore,
    mut error_message: Signal<Option<String>>,
) {
    let user_name = user_name.trim().to_owned();
    if user_name.is_empty() {
        error_message.set(Some("Please enter your name".to_owned()));
        return;
    }

    info!("Starting chat session {session_id}");
    match server::create_chat_session(session_id, user_name).await {
        Ok(info) => {
            error_message.set(None);
            // Flips the page to the chat variant through the shared state.
            store.set_session_info(info);
        }
        Err(err) => {
            error!("Failed to start chat session: {err:?}");
            error_message.set(Some(
                "Could not reach the server. Please try again.".to_owned(),
            ));
        }
    }
}
