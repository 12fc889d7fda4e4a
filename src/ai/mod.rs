//! Move providers: the [`Agent`] trait, minimax search with alpha-beta
//! pruning, a random baseline, and the interactive human provider.

mod agent;
mod human;
mod minimax;
mod random;

pub use agent::Agent;
pub use human::{prompt_column, HumanAgent};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
