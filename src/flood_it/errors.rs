use thiserror::Error;

/// Failures surfaced by the rules engine. No-op moves and exhausted
/// undo/redo stacks are reported as values, not through this type.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// A requested deal falls outside the supported board or palette limits.
    #[error("unsupported configuration: {size}x{size} board with {colours} colours")]
    InvalidConfiguration { size: usize, colours: usize },

    /// A coordinate query landed outside the grid.
    #[error("invalid coordinate ({row:02}, {col:02}) on a {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },
}
