use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random from the available columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let actions = state.available_actions();
        assert!(!actions.is_empty(), "no available actions");
        Ok(actions[self.rng.random_range(0..actions.len())])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
