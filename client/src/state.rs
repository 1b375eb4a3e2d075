use dioxus::prelude::*;
use shared::types::SessionInfo;

/// Client-side chat state shared across views. The session is considered
/// initialized exactly when `session_info` is present.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatState {
    pub session_info: Option<SessionInfo>,
}

/// Handle to the shared chat state, passed to views through component
/// context so tests can provide their own preloaded store.
#[derive(Clone, Copy)]
pub struct ChatStore {
    state: Signal<ChatState>,
}

impl ChatStore {
    /// Must be called from a component scope; the backing signal is created
    /// in the caller's reactive context.
    pub fn from_state(state: ChatState) -> Self {
        Self {
            state: Signal::new(state),
        }
    }

    /// Reactive read: a component calling this re-renders when the
    /// underlying state changes.
    pub fn is_session_initialized(&self) -> bool {
        self.state.read().session_info.is_some()
    }

    pub fn session_info(&self) -> Option<SessionInfo> {
        self.state.read().session_info.clone()
    }

    pub fn set_session_info(&mut self, info: SessionInfo) {
        self.state.write().session_info = Some(info);
    }

    pub fn clear_session(&mut self) {
        self.state.write().session_info = None;
    }
}

pub fn use_chat_store_provider() -> ChatStore {
    use_context_provider(|| ChatStore::from_state(ChatState::default()))
}

pub fn use_chat_store() -> ChatStore {
    use_context::<ChatStore>()
}
