use log::debug;

use crate::{Board, BoardError, Decision, Occupant};

/// Strategy that picks a move for `color` on `board`
///
/// An empty move list is the normal "no move" signal and must be answered
/// with [`Decision::Skip`]; a `Place` must name a cell from
/// [`Board::available_moves`].
pub trait Behaviour {
    fn decide(&mut self, board: &Board, color: Occupant) -> Decision;

    /// False for behaviours driven by a person
    fn is_bot(&self) -> bool {
        true
    }
}

/// A behaviour bound to a disk color
pub struct Player {
    behaviour: Box<dyn Behaviour>,
    color: Occupant,
}

impl Player {
    pub fn new(behaviour: Box<dyn Behaviour>, color: Occupant) -> Self {
        Player { behaviour, color }
    }

    pub fn color(&self) -> Occupant {
        self.color
    }

    pub fn is_bot(&self) -> bool {
        self.behaviour.is_bot()
    }

    /// Ask the behaviour for a decision and apply it if it is a `Place`
    ///
    /// The decision is always returned so the caller can react to `Skip`
    /// and `Undo`.
    pub fn make_step(&mut self, board: &mut Board) -> Result<Decision, BoardError> {
        let decision = self.behaviour.decide(board, self.color);
        debug!("{} player decided {:?}", self.color.name(), decision);

        if let Decision::Place { x, y } = decision {
            board.place(x, y, self.color)?;
        }

        Ok(decision)
    }
}
