use crate::error::AgentError;
use crate::game::GameState;

/// Universal interface for move providers: given a state, produce a column.
///
/// Callers only invoke a provider on a non-terminal state with at least one
/// available column; how the column is chosen (search, chance, a human at a
/// prompt) is up to the implementation.
pub trait Agent {
    /// Select a column for the current player.
    fn select_action(&mut self, state: &GameState) -> Result<usize, AgentError>;

    /// Return the provider's display name.
    fn name(&self) -> &str;
}
