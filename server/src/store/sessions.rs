use std::{
    collections::HashMap,
    sync::{LazyLock, RwLock},
    time::Instant,
};

use dioxus::logger::tracing::info;
use shared::types::{Dialogue, DialogueTurn, SessionInfo};

use crate::store::reply::{ResponseGenerator, ScriptedResponder};
use crate::ServerError;

pub static STORE: LazyLock<SessionStore> = LazyLock::new(SessionStore::default);

pub fn init() {
    LazyLock::force(&STORE);
    info!("Session store ready");
}

struct SessionRecord {
    info: SessionInfo,
    dialogue: Dialogue,
}

pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
    responder: Box<dyn ResponseGenerator>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_responder(Box::new(ScriptedResponder))
    }
}

impl SessionStore {
    pub fn with_responder(responder: Box<dyn ResponseGenerator>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            responder,
        }
    }

    /// Establishes a session, seeding its dialogue with a greeting turn.
    /// Idempotent: an already-established session is returned unchanged.
    pub fn create_session(
        &self,
        session_id: &str,
        user_name: &str,
    ) -> Result<SessionInfo, ServerError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ServerError::SessionStoreError)?;
        if let Some(record) = sessions.get(session_id) {
            return Ok(record.info.clone());
        }

        let info = SessionInfo::new(session_id, user_name);
        let greeting = DialogueTurn::bot(&self.responder.greeting(user_name), 0);
        sessions.insert(
            session_id.to_owned(),
            SessionRecord {
                info: info.clone(),
                dialogue: vec![greeting],
            },
        );
        Ok(info)
    }

    pub fn dialogue(&self, session_id: &str) -> Result<Dialogue, ServerError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| ServerError::SessionStoreError)?;
        sessions
            .get(session_id)
            .map(|record| record.dialogue.clone())
            .ok_or(ServerError::SessionNotFound)
    }

    /// Appends the user turn and the generated bot turn, returning both.
    pub fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<Vec<DialogueTurn>, ServerError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ServerError::EmptyMessage);
        }

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| ServerError::SessionStoreError)?;
        let record = sessions
            .get_mut(session_id)
            .ok_or(ServerError::SessionNotFound)?;

        record.dialogue.push(DialogueTurn::user(message));

        let start = Instant::now();
        let reply = self.responder.respond(&record.dialogue);
        let elapsed = start.elapsed().as_millis() as i64;
        record.dialogue.push(DialogueTurn::bot(&reply, elapsed));

        let new_turns = record.dialogue[record.dialogue.len() - 2..].to_vec();
        Ok(new_turns)
    }
}
