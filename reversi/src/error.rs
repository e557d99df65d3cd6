/// Errors raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside a {size}x{size} board")]
    OutOfRange { x: usize, y: usize, size: usize },

    #[error("board size must be at least 2, got {0}")]
    InvalidSize(usize),
}
