use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::decision::Decision;
use crate::game::layout::{self, Point};
use crate::game::scenario::Scenario;
use crate::game::sequence::{
    random_outcome, DecisionSequence, Outcome, SequenceError, SequenceState,
};

/// Logical canvas width used for button layout.
pub const CANVAS_WIDTH: f32 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Game,
    Win,
    Lose,
}

impl From<Outcome> for Screen {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => Screen::Win,
            Outcome::Lose => Screen::Lose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other(char),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer released at a canvas position.
    PointerReleased(Point),
    /// Option picked directly by index (keyboard / terminal hosts).
    Select(usize),
    Key(Key),
}

/// Routes input into the decision sequence and tracks which screen is active.
pub struct GameScreen {
    title: String,
    sequence: DecisionSequence,
    state: SequenceState,
    screen: Screen,
    /// Good choices of the last finished playthrough, `None` after a skip.
    final_score: Option<usize>,
    rng: StdRng,
}

impl GameScreen {
    pub fn new(scenario: Scenario, seed: Option<u64>) -> Result<Self, SequenceError> {
        let sequence = DecisionSequence::new(scenario.decisions)?;
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            title: scenario.title,
            state: sequence.start(),
            sequence,
            screen: Screen::Game,
            final_score: None,
            rng,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    pub fn final_score(&self) -> Option<usize> {
        self.final_score
    }

    pub fn current(&self) -> Result<&Decision, SequenceError> {
        self.sequence.current(&self.state)
    }

    /// "Good Choices: g/t" readout.
    pub fn score_line(&self) -> String {
        format!("Good Choices: {}/{}", self.state.good_count, self.state.total)
    }

    /// Dispatch one input event. Returns the active screen afterwards.
    pub fn handle(&mut self, event: InputEvent) -> Result<Screen, SequenceError> {
        if self.screen != Screen::Game {
            debug!("Ignoring {event:?} on {:?} screen", self.screen);
            return Ok(self.screen);
        }

        match event {
            InputEvent::PointerReleased(p) => {
                let hit = layout::option_at(CANVAS_WIDTH, self.current()?, p);
                match hit {
                    Some(choice) => self.choose(choice)?,
                    None => debug!("Pointer release at ({}, {}) hit no option", p.x, p.y),
                }
            }
            InputEvent::Select(choice) => self.choose(choice)?,
            InputEvent::Key(Key::Enter) => {
                let outcome = random_outcome(|| self.rng.gen::<f64>());
                info!("Random outcome triggered: {outcome:?}");
                self.final_score = None;
                self.screen = outcome.into();
            }
            InputEvent::Key(Key::Other(c)) => debug!("Unbound key {c:?}"),
        }

        Ok(self.screen)
    }

    /// Back to the game screen for another playthrough.
    pub fn restart(&mut self) {
        info!("Restarting from {:?} screen", self.screen);
        self.screen = Screen::Game;
        self.final_score = None;
    }

    fn choose(&mut self, choice: usize) -> Result<(), SequenceError> {
        let step = self.sequence.choose(self.state, choice)?;
        debug!(
            "Choice {choice} at decision {} -> {}/{} good",
            self.state.current_index, step.good_count, step.state.total
        );
        self.state = step.state;
        if let Some(outcome) = step.outcome {
            self.final_score = Some(step.good_count);
            self.screen = outcome.into();
        }
        Ok(())
    }
}
