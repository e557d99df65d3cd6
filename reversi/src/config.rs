use serde::{Deserialize, Serialize};

use crate::board::STANDARD_SIZE;
use crate::{Board, BoardError};

/// Board settings, the `[board]` table of a game config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Whether placements can be taken back
    pub undo_enabled: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            size: STANDARD_SIZE,
            undo_enabled: true,
        }
    }
}

impl BoardConfig {
    /// Create a board in its starting position
    pub fn build(&self) -> Result<Board, BoardError> {
        let mut board = Board::new(self.size, self.undo_enabled)?;
        board.initialize();
        Ok(board)
    }
}
