use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::Agent;

/// Ply number assigned to the first recursive level below the root.
const ROOT_PLY: u32 = 2;

/// Minimax search agent with alpha-beta pruning.
///
/// The game tree is explored all the way to terminal states; there is no
/// depth cutoff, so move selection on large boards runs to completion
/// however long that takes. Terminal rewards are weighted by the ply at
/// which they occur, so a win two moves out scores higher than the same win
/// five moves out. Root-level ties are broken uniformly at random.
///
/// Exploration works on a single scratch copy of the caller's state: each
/// candidate move is applied with `act()` and exactly reversed with
/// `retract()` on the way back up, so recursion never allocates a board.
pub struct MinimaxAgent {
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new() -> Self {
        MinimaxAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seed the tie-breaking RNG for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        MinimaxAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// All root moves sharing the best minimax value.
    ///
    /// A move that ends the game scores its absolute reward: whoever just
    /// moved either won or drew, so stripping the player-two sign makes the
    /// score "1 = the mover won" regardless of side. Non-terminal moves are
    /// valued by descending into the opponent's (minimizing) ply.
    fn best_actions(&self, state: &GameState) -> Vec<usize> {
        let actions = state.available_actions();
        assert!(!actions.is_empty(), "no available actions");

        let mut scratch = state.clone();
        let mut best_value = f64::NEG_INFINITY;
        let mut best_actions = Vec::new();

        for column in actions {
            let outcome = scratch.act(column).unwrap();

            let value = if outcome.terminal {
                outcome.reward.abs()
            } else {
                self.value(&mut scratch, true, f64::NEG_INFINITY, f64::INFINITY, ROOT_PLY)
            };
            scratch.retract(column);

            if value > best_value {
                best_value = value;
                best_actions.clear();
                best_actions.push(column);
            } else if value == best_value {
                best_actions.push(column);
            }
        }

        best_actions
    }

    /// Depth-weighted minimax value of `state`, searched to terminal states
    /// with fail-hard alpha-beta pruning.
    ///
    /// A terminal move found at ply `d` contributes `|reward| / d`, negated
    /// when it is a win reached on a minimizing ply; draws stay at zero for
    /// either side. Every explored move is retracted before the next sibling
    /// or return, so the state comes back exactly as it went in.
    fn value(
        &self,
        state: &mut GameState,
        minimizing: bool,
        mut alpha: f64,
        mut beta: f64,
        ply: u32,
    ) -> f64 {
        let mut best = if minimizing {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };

        for column in state.available_actions() {
            let outcome = state.act(column).unwrap();

            let value = if outcome.terminal {
                let mut weighted = outcome.reward.abs() / f64::from(ply);
                if minimizing && outcome.reward != 0.0 {
                    weighted = -weighted;
                }
                weighted
            } else {
                self.value(state, !minimizing, alpha, beta, ply + 1)
            };
            state.retract(column);

            if minimizing {
                beta = beta.min(value);
                if value <= alpha {
                    return value;
                }
                best = best.min(value);
            } else {
                alpha = alpha.max(value);
                if value >= beta {
                    return value;
                }
                best = best.max(value);
            }
        }

        best
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError> {
        let best = self.best_actions(state);
        Ok(best[self.rng.random_range(0..best.len())])
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
