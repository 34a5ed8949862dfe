use serde::Deserialize;

/// Number of options every decision must carry.
pub const OPTIONS_PER_DECISION: usize = 2;

/// One question shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Decision {
    /// The question text (e.g. "Do you give it water?").
    pub prompt: String,
    /// Exactly two answers. The good one is conventionally listed first.
    pub options: Vec<Choice>,
}

/// A selectable answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Choice {
    pub label: String,
    // Counts towards the good-choice tally
    pub is_good: bool,
}

impl Decision {
    pub fn new(prompt: impl Into<String>, good: impl Into<String>, bad: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options: vec![Choice::good(good), Choice::bad(bad)],
        }
    }
}

impl Choice {
    pub fn good(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_good: true,
        }
    }

    pub fn bad(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_good: false,
        }
    }
}
