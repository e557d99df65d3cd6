use crate::Cell;

/// Outcome of a behaviour's turn
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Decision {
    /// Put a disk at column `x`, row `y`
    Place { x: usize, y: usize },
    /// No legal move, pass the turn
    Skip,
    /// Ask the orchestrator to take moves back
    Undo,
}

impl Decision {
    /// `Place` on the given cell
    pub fn place_at(cell: &Cell) -> Self {
        Decision::Place {
            x: cell.x(),
            y: cell.y(),
        }
    }

    /// Coordinates of a `Place`, `None` otherwise
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        match *self {
            Decision::Place { x, y } => Some((x, y)),
            Decision::Skip | Decision::Undo => None,
        }
    }
}
