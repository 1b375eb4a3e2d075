use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::ids;

/// Milliseconds since the Unix epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Established chat session. Its presence in client state is what flips the
/// chat page from the intro variant to the chat variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub session_id: String,
    pub user_name: String,
    pub started_at: i64,
}

impl SessionInfo {
    pub fn new(session_id: &str, user_name: &str) -> Self {
        Self {
            session_id: session_id.to_owned(),
            user_name: user_name.to_owned(),
            started_at: now_millis(),
        }
    }
}

/// One message in a dialogue, from either side of the conversation.
/// Bot turns additionally record how long the reply took to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTurn {
    pub id: String,
    pub message: String,
    pub is_user: bool,
    pub timestamp: i64,
    pub processing_time: Option<i64>,
}

impl DialogueTurn {
    pub fn user(message: &str) -> Self {
        Self {
            id: ids::new_turn_id(),
            message: message.to_owned(),
            is_user: true,
            timestamp: now_millis(),
            processing_time: None,
        }
    }

    pub fn bot(message: &str, processing_time: i64) -> Self {
        Self {
            id: ids::new_turn_id(),
            message: message.to_owned(),
            is_user: false,
            timestamp: now_millis(),
            processing_time: Some(processing_time),
        }
    }
}

pub type Dialogue = Vec<DialogueTurn>;
