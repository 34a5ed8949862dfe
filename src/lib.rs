//! Lost Puppy Adventure: a short run of two-option decisions scored by how
//! many good choices the player makes, ending on a win or lose screen.

pub mod config;
pub mod game;

pub use game::decision::{Choice, Decision};
pub use game::scenario::{lost_puppy_scenario, Scenario, ScenarioError};
pub use game::screen::{GameScreen, InputEvent, Key, Screen};
pub use game::sequence::{
    random_outcome, DecisionSequence, Outcome, SequenceError, SequenceState, Step,
};
