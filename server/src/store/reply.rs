use shared::types::Dialogue;

/// Produces bot turns for a dialogue. Behind a trait so the scripted
/// responder can be swapped for a real generator without touching the store.
pub trait ResponseGenerator: Send + Sync {
    fn greeting(&self, user_name: &str) -> String;

    fn respond(&self, dialogue: &Dialogue) -> String;
}

const PROMPTS: &[&str] = &[
    "Tell me more about that.",
    "How did that make you feel?",
    "What do you think led to that?",
    "What would you like to try next?",
];

/// Cycles through a fixed list of follow-up prompts, keyed by how many user
/// turns the dialogue already contains.
pub struct ScriptedResponder;

impl ResponseGenerator for ScriptedResponder {
    fn greeting(&self, user_name: &str) -> String {
        format!("Hi {user_name}! What would you like to talk about today?")
    }

    fn respond(&self, dialogue: &Dialogue) -> String {
        let user_turns = dialogue.iter().filter(|turn| turn.is_user).count();
        let index = user_turns.saturating_sub(1) % PROMPTS.len();
        PROMPTS[index].to_owned()
    }
}

#[cfg(test)]
mod tests {
    use shared::types::DialogueTurn;

    use crate::store::reply::{ResponseGenerator, ScriptedResponder, PROMPTS};

    #[test]
    fn test_greeting_mentions_user() {
        let responder = ScriptedResponder;
        assert!(responder.greeting("Dana").contains("Dana"));
    }

    #[test]
    fn test_prompts_cycle_with_user_turns() {
        let responder = ScriptedResponder;
        let mut dialogue = vec![DialogueTurn::user("first")];
        assert_eq!(responder.respond(&dialogue), PROMPTS[0]);

        for round in 1..PROMPTS.len() + 1 {
            dialogue.push(DialogueTurn::bot("prompt", 0));
            dialogue.push(DialogueTurn::user("another"));
            assert_eq!(responder.respond(&dialogue), PROMPTS[round % PROMPTS.len()]);
        }
    }
}
