use log::info;
use thiserror::Error;

use crate::game::decision::{Decision, OPTIONS_PER_DECISION};

/// Faults raised when the controller is driven outside its preconditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("sequence has no decisions")]
    Empty,
    #[error("sequence already complete: index {index} of {total}")]
    Complete { index: usize, total: usize },
    #[error("decision {index} has no choice {choice}")]
    NoSuchChoice { index: usize, choice: usize },
    #[error("decision {index} has {count} options, expected 2")]
    OptionCount { index: usize, count: usize },
    #[error("state {state:?} does not belong to a sequence of {total}")]
    ForeignState { state: SequenceState, total: usize },
}

/// Terminal classification of a playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
}

/// Progress through one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceState {
    pub current_index: usize,
    pub good_count: usize,
    pub total: usize,
}

impl SequenceState {
    pub fn new(total: usize) -> Self {
        Self {
            current_index: 0,
            good_count: 0,
            total,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.total
    }
}

/// Result of a single `choose` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: SequenceState,
    /// Set only on the call that finishes the playthrough.
    pub outcome: Option<Outcome>,
    /// Good choices counted before any reset.
    pub good_count: usize,
}

/// Drives a fixed, ordered list of decisions. The controller holds the
/// content only; progress lives in the `SequenceState` passed in and out.
#[derive(Debug, Clone)]
pub struct DecisionSequence {
    decisions: Vec<Decision>,
}

impl DecisionSequence {
    pub fn new(decisions: Vec<Decision>) -> Result<Self, SequenceError> {
        if decisions.is_empty() {
            return Err(SequenceError::Empty);
        }
        for (index, decision) in decisions.iter().enumerate() {
            if decision.options.len() != OPTIONS_PER_DECISION {
                return Err(SequenceError::OptionCount {
                    index,
                    count: decision.options.len(),
                });
            }
        }
        Ok(Self { decisions })
    }

    pub fn total(&self) -> usize {
        self.decisions.len()
    }

    pub fn start(&self) -> SequenceState {
        SequenceState::new(self.total())
    }

    pub fn current(&self, state: &SequenceState) -> Result<&Decision, SequenceError> {
        self.check(state)?;
        self.decisions
            .get(state.current_index)
            .ok_or(SequenceError::Complete {
                index: state.current_index,
                total: self.total(),
            })
    }

    /// Apply the player's pick of option `choice` of the current decision.
    ///
    /// When this finishes the sequence the outcome is computed from the
    /// pre-reset count and the returned state is already back at the start.
    pub fn choose(&self, state: SequenceState, choice: usize) -> Result<Step, SequenceError> {
        let decision = self.current(&state)?;
        let picked = decision
            .options
            .get(choice)
            .ok_or(SequenceError::NoSuchChoice {
                index: state.current_index,
                choice,
            })?;

        let total = self.total();
        let mut next = state;
        if picked.is_good {
            next.good_count += 1;
        }
        next.current_index += 1;

        if next.current_index < total {
            return Ok(Step {
                state: next,
                outcome: None,
                good_count: next.good_count,
            });
        }

        let outcome = if next.good_count * 2 >= total {
            Outcome::Win
        } else {
            Outcome::Lose
        };
        info!(
            "Sequence complete: {}/{} good -> {:?}",
            next.good_count, total, outcome
        );

        Ok(Step {
            state: SequenceState::new(total),
            outcome: Some(outcome),
            good_count: next.good_count,
        })
    }

    /// Rejects states built for another sequence or with more good
    /// choices than steps taken.
    fn check(&self, state: &SequenceState) -> Result<(), SequenceError> {
        if state.total != self.total() || state.good_count > state.current_index {
            return Err(SequenceError::ForeignState {
                state: *state,
                total: self.total(),
            });
        }
        Ok(())
    }
}

/// Coin flip that bypasses the sequence entirely.
pub fn random_outcome(random_source: impl FnOnce() -> f64) -> Outcome {
    if random_source() < 0.5 {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
