use engine::GameLogic;

use crate::input::Intent;
use crate::state::{SimConfig, SimState};
use crate::tick;

/// Intents collected between two ticks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub intents: Vec<Intent>,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn from_intents(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DriftLogic {
    config: SimConfig,
}

impl DriftLogic {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl GameLogic for DriftLogic {
    type State = SimState;
    type Input = TickInput;

    fn initial_state(&self) -> Self::State {
        SimState::new(&self.config)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> Self::State {
        let mut next = state.clone();
        tick::tick(&mut next, input.intents, &self.config);
        next
    }
}
