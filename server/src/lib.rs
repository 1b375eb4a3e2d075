#[cfg(feature = "server")]
mod store;

use std::{fmt::Display, str::FromStr};

use dioxus::{logger::tracing::{debug, error, info}, prelude::*};
use serde::{Deserialize, Serialize};
use shared::types::{Dialogue, DialogueTurn, SessionInfo};

#[cfg(feature = "server")]
use crate::store::sessions::STORE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerError {
    SessionStoreError,
    SessionNotFound,
    EmptyMessage,
}

impl FromStr for ServerError {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SessionStoreError" => Ok(Self::SessionStoreError),
            "SessionNotFound" => Ok(Self::SessionNotFound),
            "EmptyMessage" => Ok(Self::EmptyMessage),
            _ => Err(()),
        }
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::SessionStoreError => "SessionStoreError",
            Self::SessionNotFound => "SessionNotFound",
            Self::EmptyMessage => "EmptyMessage",
        })?;
        Ok(())
    }
}

/// Establishes a chat session for the given client-generated identifier.
/// Calling it again with the same identifier returns the already-established
/// session, so a re-submitted intro form cannot fork a session.
#[server]
pub async fn create_chat_session(
    session_id: String,
    user_name: String,
) -> Result<SessionInfo, ServerFnError<ServerError>> {
    match STORE.create_session(&session_id, &user_name) {
        Ok(info) => {
            info!("Chat session established: {session_id}");
            Ok(info)
        }
        Err(err) => {
            error!("Failed to establish chat session {session_id}: {err:?}");
            Err(ServerFnError::WrappedServerError(err))
        }
    }
}

#[server]
pub async fn get_dialogue(
    session_id: String,
) -> Result<Dialogue, ServerFnError<ServerError>> {
    match STORE.dialogue(&session_id) {
        Ok(dialogue) => {
            debug!("Fetched {} turns for session {session_id}", dialogue.len());
            Ok(dialogue)
        }
        Err(err) => {
            error!("Failed to fetch dialogue for {session_id}: {err:?}");
            Err(ServerFnError::WrappedServerError(err))
        }
    }
}

/// Appends the user's message to the session dialogue and produces the bot
/// reply. Returns both new turns in dialogue order.
#[server]
pub async fn send_chat_message(
    session_id: String,
    message: String,
) -> Result<Vec<DialogueTurn>, ServerFnError<ServerError>> {
    match STORE.send_message(&session_id, &message) {
        Ok(turns) => Ok(turns),
        Err(err) => {
            error!("Failed to append message to {session_id}: {err:?}");
            Err(ServerFnError::WrappedServerError(err))
        }
    }
}

#[cfg(feature = "server")]
pub fn init_server() {
    store::sessions::init();
}
