use crate::game::Board;

/// Anything that can pick a column for the side it plays.
pub trait Agent {
    /// Pick a column to drop into, or `None` when the board has no legal column.
    fn select_column(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
