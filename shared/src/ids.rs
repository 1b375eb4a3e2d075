//! Opaque identifier generation for chat sessions and dialogue turns.

use nanoid::nanoid;

/// Length of a session identifier. Collision-resistant enough that ids
/// generated by concurrent clients never have to be coordinated.
pub const SESSION_ID_LENGTH: usize = 21;

pub const TURN_ID_LENGTH: usize = 20;

/// Generates a new session identifier. Called once per mounted chat page;
/// the token is never persisted.
pub fn new_session_id() -> String {
    nanoid!(SESSION_ID_LENGTH)
}

pub fn new_turn_id() -> String {
    nanoid!(TURN_ID_LENGTH)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::ids::{new_session_id, new_turn_id, SESSION_ID_LENGTH, TURN_ID_LENGTH};

    fn is_url_safe(id: &str) -> bool {
        id.chars()
            .all(|chr| chr.is_ascii_alphanumeric() || chr == '_' || chr == '-')
    }

    #[test]
    fn test_session_id_shape() {
        let id = new_session_id();
        assert_eq!(id.len(), SESSION_ID_LENGTH);
        assert!(is_url_safe(&id));
    }

    #[test]
    fn test_turn_id_shape() {
        let id = new_turn_id();
        assert_eq!(id.len(), TURN_ID_LENGTH);
        assert!(is_url_safe(&id));
    }

    #[test]
    fn test_session_ids_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(new_session_id()));
        }
    }
}
