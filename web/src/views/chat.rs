use client::packet::RequestState;
use client::state::use_chat_store;
use client::use_server_request;
use dioxus::{logger::tracing::error, prelude::*};
use shared::types::{Dialogue, DialogueTurn};

#[component]
pub fn ChatView() -> Element {
    let mut store = use_chat_store();
    let Some(info) = store.session_info() else {
        // ChatPage only renders this view for an established session.
        return rsx! {
            h3 { "No active chat session" }
        };
    };

    // The request macro re-issues the call from a captured closure, so the
    // id goes in as a Copy signal rather than an owned String.
    let session_id = info.session_id.clone();
    let request_id = use_signal(move || session_id);
    let history = use_server_request!(server::get_dialogue(request_id()));

    // Turns exchanged after the initial history fetch.
    let new_turns: Signal<Dialogue> = use_signal(Dialogue::new);
    let mut draft: Signal<String> = use_signal(String::new);
    let error_message: Signal<Option<String>> = use_signal(|| None);

    let history_view = match &history {
        RequestState::Ready(turns) => {
            let all_turns = merge_turns(turns, &new_turns.read());
            rsx! {
                for turn in all_turns {
                    Turn { key: "{turn.id}", turn: turn.clone() }
                }
            }
        }
        RequestState::Pending => rsx! { h3 { "Loading conversation" } },
        RequestState::TimedOut => rsx! { h3 { "The server is taking too long to respond" } },
        RequestState::Failed(_) => rsx! { h3 { "Could not load the conversation" } },
    };

    let submit_id = info.session_id.clone();
    rsx! {
        div {
            class: "chat-view",

            h2 { "Chatting as {info.user_name}" }

            if let Some(message) = error_message() {
                div {
                    class: "error-container",
                    p { "{message}" }
                }
            }

            div {
                class: "chat-history",
                {history_view}
            }

            form {
                onsubmit: move |_event| {
                    let session_id = submit_id.clone();
                    let message = draft();
                    async move {
                        if submit_message(session_id, message, new_turns, error_message).await {
                            draft.set(String::new());
                        }
                    }
                },

                input {
                    name: "message",
                    placeholder: "Say something",
                    value: draft(),
                    oninput: move |event| draft.set(event.value()),
                }
                button { "Send" }
            }

            button {
                class: "end-chat",
                onclick: move |_| store.clear_session(),
                "End chat"
            }
        }
    }
}

/// Joins the fetched history with turns exchanged on this client since the
/// fetch. A retried fetch can already contain those turns, so anything with
/// an already-seen id is skipped.
fn merge_turns(history: &[DialogueTurn], appended: &[DialogueTurn]) -> Dialogue {
    let mut merged: Dialogue = history.to_vec();
    merged.extend(
        appended
            .iter()
            .filter(|turn| !history.iter().any(|seen| seen.id == turn.id))
            .cloned(),
    );
    merged
}

async fn submit_message(
    session_id: String,
    message: String,
    mut new_turns: Signal<Dialogue>,
    mut error_message: Signal<Option<String>>,
) -> bool {
    let message = message.trim().to_owned();
    if message.is_empty() {
        return false;
    }

    match server::send_chat_message(session_id, message).await {
        Ok(turns) => {
            error_message.set(None);
            new_turns.write().extend(turns);
            true
        }
        Err(err) => {
            error!("Failed to send chat message: {err:?}");
            error_message.set(Some("Message could not be sent.".to_owned()));
            false
        }
    }
}

#[component]
fn Turn(turn: DialogueTurn) -> Element {
    let class = if turn.is_user {
        "message message-user"
    } else {
        "message message-bot"
    };
    rsx! {
        div {
            class: "{class}",
            p { "{turn.message}" }
        }
    }
}
