//! Greedy Engine - Static Positional Heuristic
//!
//! Algorithm Strategy:
//! - Scores every legal move without looking at the opponent's replies
//! - Captured disks on an edge are worth more than interior ones, since the
//!   opponent has fewer lines to take them back on
//! - Landing on a corner or an edge adds a bonus; corners can never be flipped
//!
//! Rate of a move:
//! - sum over the disks it would flip: `edge_capture` (2.0) for a disk on an
//!   edge but not a corner, `interior_capture` (1.0) otherwise
//! - plus `corner_bonus` (0.8) if the move itself is a corner, else
//!   `edge_bonus` (0.4) if it is on an edge
//!
//! Moves rated below `min_rate` are discarded. The highest rate wins, the
//! first move in row-major order wins ties, and when everything was
//! discarded the first legal move is played.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use reversi::{Behaviour, Board, Cell, Decision, Occupant};

/// Position class of a cell
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellType {
    Corner,
    Edge,
    Interior,
}

impl CellType {
    /// Classify `cell` on a `size` x `size` board
    pub fn of(cell: &Cell, size: usize) -> CellType {
        let on_column_edge = cell.x() == 0 || cell.x() + 1 == size;
        let on_row_edge = cell.y() == 0 || cell.y() + 1 == size;

        match (on_column_edge, on_row_edge) {
            (true, true) => CellType::Corner,
            (true, false) | (false, true) => CellType::Edge,
            (false, false) => CellType::Interior,
        }
    }
}

/// Weights of the rate table, the `[greedy]` table of a game config file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateWeights {
    /// Per flipped disk not on an edge
    pub interior_capture: f64,
    /// Per flipped disk on an edge
    pub edge_capture: f64,
    /// Added when the move is a corner
    pub corner_bonus: f64,
    /// Added when the move is on an edge
    pub edge_bonus: f64,
    /// Moves rated below this are not considered
    pub min_rate: f64,
}

impl Default for RateWeights {
    fn default() -> Self {
        RateWeights {
            interior_capture: 1.0,
            edge_capture: 2.0,
            corner_bonus: 0.8,
            edge_bonus: 0.4,
            min_rate: 1.0,
        }
    }
}

impl RateWeights {
    /// All weights as `(name, value)` pairs
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("interior_capture", self.interior_capture),
            ("edge_capture", self.edge_capture),
            ("corner_bonus", self.corner_bonus),
            ("edge_bonus", self.edge_bonus),
            ("min_rate", self.min_rate),
        ]
    }
}

/// Picks the best-rated move, see the module docs
#[derive(Debug, Clone, Default)]
pub struct GreedyBehaviour {
    weights: RateWeights,
}

impl GreedyBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: RateWeights) -> Self {
        GreedyBehaviour { weights }
    }

    pub fn weights(&self) -> &RateWeights {
        &self.weights
    }

    /// Rate of `color` playing on `cell`; `min_rate` is not applied
    pub fn rate(&self, board: &Board, cell: &Cell, color: Occupant) -> f64 {
        let size = board.size();

        let captured: f64 = board
            .closed_cells(cell, color)
            .iter()
            .map(|closed| match CellType::of(closed, size) {
                CellType::Edge => self.weights.edge_capture,
                CellType::Corner | CellType::Interior => self.weights.interior_capture,
            })
            .sum();

        let bonus = match CellType::of(cell, size) {
            CellType::Corner => self.weights.corner_bonus,
            CellType::Edge => self.weights.edge_bonus,
            CellType::Interior => 0.0,
        };

        captured + bonus
    }

    /// Every legal move for `color` with its rate, in row-major order
    pub fn rates(&self, board: &Board, color: Occupant) -> Vec<(Cell, f64)> {
        board
            .available_moves(color)
            .into_iter()
            .map(|cell| {
                let rate = self.rate(board, &cell, color);
                (cell, rate)
            })
            .collect()
    }

    /// Move the heuristic would play, `None` without legal moves
    pub fn choose(&self, board: &Board, color: Occupant) -> Option<Cell> {
        let rates = self.rates(board, color);
        let first = rates.first()?.0;

        let mut best: Option<(Cell, f64)> = None;
        for (cell, rate) in rates {
            trace!("greedy {} ({}, {}) rate {:.2}", color.name(), cell.x(), cell.y(), rate);
            if rate < self.weights.min_rate {
                continue;
            }
            if best.map_or(true, |(_, best_rate)| rate > best_rate) {
                best = Some((cell, rate));
            }
        }

        Some(best.map_or(first, |(cell, _)| cell))
    }
}

impl Behaviour for GreedyBehaviour {
    fn decide(&mut self, board: &Board, color: Occupant) -> Decision {
        match self.choose(board, color) {
            Some(cell) => {
                debug!("greedy {} plays ({}, {})", color.name(), cell.x(), cell.y());
                Decision::place_at(&cell)
            }
            None => {
                debug!("greedy {} has no move", color.name());
                Decision::Skip
            }
        }
    }
}
