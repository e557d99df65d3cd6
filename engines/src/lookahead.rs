//! Lookahead Engine - One-Ply Adversarial Refinement of the Greedy Rate
//!
//! Algorithm Details:
//! - For each legal move, take its greedy rate (no `min_rate` filter)
//! - Play the move on a private copy of the board and find the opponent's
//!   best greedy rate in reply (0 if the opponent cannot move)
//! - Net score = own rate - best reply rate
//! - Highest net score wins, first move in row-major order wins ties
//!
//! The copy is made once per decision and rewound with its own undo history
//! after every simulated move, so the real board is never touched.

use log::{debug, trace};

use reversi::{Behaviour, Board, Cell, Decision, Occupant};

use crate::greedy::{GreedyBehaviour, RateWeights};

/// Greedy rate minus the opponent's best greedy reply
#[derive(Debug, Clone, Default)]
pub struct LookaheadBehaviour {
    greedy: GreedyBehaviour,
}

impl LookaheadBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: RateWeights) -> Self {
        LookaheadBehaviour {
            greedy: GreedyBehaviour::with_weights(weights),
        }
    }

    /// The evaluator used for both sides
    pub fn greedy(&self) -> &GreedyBehaviour {
        &self.greedy
    }

    /// Highest greedy rate among `color`'s moves, 0 without moves
    pub fn best_reply_rate(&self, board: &Board, color: Occupant) -> f64 {
        self.greedy
            .rates(board, color)
            .into_iter()
            .map(|(_, rate)| rate)
            .reduce(f64::max)
            .unwrap_or(0.0)
    }

    /// Net score of every legal move for `color`, in row-major order
    pub fn net_scores(&self, board: &Board, color: Occupant) -> Vec<(Cell, f64)> {
        let moves = board.available_moves(color);
        if moves.is_empty() {
            return Vec::new();
        }

        let mut simulation = board.copy();
        simulation.set_undo_enabled(true);
        let opponent = color.opponent();

        let mut scores = Vec::with_capacity(moves.len());
        for cell in moves {
            let own = self.greedy.rate(board, &cell, color);
            // Candidates come from `available_moves`, so they are on the board
            let _ = simulation.place(cell.x(), cell.y(), color);
            let reply = self.best_reply_rate(&simulation, opponent);
            simulation.restore_previous_step();

            trace!(
                "lookahead {} ({}, {}) own {:.2} reply {:.2}",
                color.name(),
                cell.x(),
                cell.y(),
                own,
                reply
            );
            scores.push((cell, own - reply));
        }

        scores
    }

    /// Net score of a single move
    pub fn net_score(&self, board: &Board, cell: &Cell, color: Occupant) -> f64 {
        let own = self.greedy.rate(board, cell, color);

        let mut simulation = board.copy();
        if simulation.place(cell.x(), cell.y(), color).is_err() {
            return own;
        }
        own - self.best_reply_rate(&simulation, color.opponent())
    }

    /// Move with the highest net score, `None` without legal moves
    pub fn choose(&self, board: &Board, color: Occupant) -> Option<Cell> {
        let mut best: Option<(Cell, f64)> = None;
        for (cell, score) in self.net_scores(board, color) {
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        best.map(|(cell, _)| cell)
            .or_else(|| board.available_moves(color).first().copied())
    }
}

impl Behaviour for LookaheadBehaviour {
    fn decide(&mut self, board: &Board, color: Occupant) -> Decision {
        match self.choose(board, color) {
            Some(cell) => {
                debug!("lookahead {} plays ({}, {})", color.name(), cell.x(), cell.y());
                Decision::place_at(&cell)
            }
            None => {
                debug!("lookahead {} has no move", color.name());
                Decision::Skip
            }
        }
    }
}
