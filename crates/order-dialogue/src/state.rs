use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the conversation with the customer currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueState {
    AwaitingFirstOrder,
    AwaitingConfirmation,
    AwaitingAddMoreDecision,
    AwaitingAdditionalUtterance,
    Finalized,
}

impl DialogueState {
    pub fn is_terminal(self) -> bool {
        self == DialogueState::Finalized
    }
}

impl fmt::Display for DialogueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DialogueState::AwaitingFirstOrder => "awaiting first order",
            DialogueState::AwaitingConfirmation => "awaiting confirmation",
            DialogueState::AwaitingAddMoreDecision => "awaiting add-more decision",
            DialogueState::AwaitingAdditionalUtterance => "awaiting additional order",
            DialogueState::Finalized => "finalized",
        };
        f.write_str(s)
    }
}

/// A yes/no reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    /// Case-insensitive substring match; "yes" is checked before "no"
    pub fn classify(text: &str) -> Option<Answer> {
        let lower = text.to_lowercase();
        if lower.contains("yes") {
            Some(Answer::Yes)
        } else if lower.contains("no") {
            Some(Answer::No)
        } else {
            None
        }
    }
}
