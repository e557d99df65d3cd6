//! Boundary for moves chosen by a person
//!
//! Reading and parsing input is left to a [`MoveSource`]; this module only
//! makes sure whatever it answers is usable on the current board.

use log::warn;

use crate::{Behaviour, Board, Cell, Decision, Occupant};

/// External supplier of a person's decisions, e.g. a terminal prompt
pub trait MoveSource {
    /// Ask for a decision. `moves` is never empty.
    fn request(&mut self, board: &Board, color: Occupant, moves: &[Cell]) -> Decision;
}

impl<F> MoveSource for F
where
    F: FnMut(&Board, Occupant, &[Cell]) -> Decision,
{
    fn request(&mut self, board: &Board, color: Occupant, moves: &[Cell]) -> Decision {
        self(board, color, moves)
    }
}

/// Behaviour that defers to a person through a [`MoveSource`]
pub struct HumanBehaviour<S> {
    source: S,
}

impl<S: MoveSource> HumanBehaviour<S> {
    pub fn new(source: S) -> Self {
        HumanBehaviour { source }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: MoveSource> Behaviour for HumanBehaviour<S> {
    /// Skip without asking when there is no legal move; otherwise ask again
    /// until the answer is a legal `Place` or an `Undo` the board allows
    fn decide(&mut self, board: &Board, color: Occupant) -> Decision {
        let moves = board.available_moves(color);
        if moves.is_empty() {
            return Decision::Skip;
        }

        loop {
            let decision = self.source.request(board, color, &moves);
            match decision {
                Decision::Place { x, y } if moves.iter().any(|cell| cell.x() == x && cell.y() == y) => {
                    return decision;
                }
                Decision::Place { x, y } => warn!("({}, {}) is not a legal move for {}", x, y, color.name()),
                Decision::Undo if !board.is_undo_enabled() => warn!("undo is disabled on this board"),
                Decision::Undo => return decision,
                Decision::Skip => warn!("{} cannot skip while moves are available", color.name()),
            }
        }
    }

    fn is_bot(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays canned answers and counts how often it was asked
    struct Scripted {
        answers: Vec<Decision>,
        asked: usize,
    }

    impl Scripted {
        fn new(answers: &[Decision]) -> Self {
            Scripted {
                answers: answers.iter().rev().copied().collect(),
                asked: 0,
            }
        }
    }

    impl MoveSource for Scripted {
        fn request(&mut self, _board: &Board, _color: Occupant, moves: &[Cell]) -> Decision {
            assert!(!moves.is_empty());
            self.asked += 1;
            self.answers.pop().expect("script exhausted")
        }
    }

    #[test]
    fn test_skip_without_asking_when_no_moves() {
        let board = Board::from_rows(&["D..L", "....", "....", "...."]).unwrap();
        let mut human = HumanBehaviour::new(Scripted::new(&[Decision::Place { x: 1, y: 0 }]));

        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Skip);
        assert_eq!(human.into_source().asked, 0);
    }

    #[test]
    fn test_legal_place_is_returned() {
        let board = Board::default();
        let mut human = HumanBehaviour::new(Scripted::new(&[Decision::Place { x: 4, y: 5 }]));

        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Place { x: 4, y: 5 });
    }

    #[test]
    fn test_illegal_place_is_asked_again() {
        let board = Board::default();
        let mut human = HumanBehaviour::new(Scripted::new(&[
            Decision::Place { x: 0, y: 0 },
            Decision::Place { x: 3, y: 3 },
            Decision::Place { x: 2, y: 3 },
        ]));

        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Place { x: 2, y: 3 });
        assert_eq!(human.into_source().asked, 3);
    }

    #[test]
    fn test_undo_depends_on_board() {
        let board = Board::default();
        let mut human = HumanBehaviour::new(Scripted::new(&[Decision::Undo]));
        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Undo);

        let mut board = Board::new(8, false).unwrap();
        board.initialize();
        let mut human = HumanBehaviour::new(Scripted::new(&[Decision::Undo, Decision::Place { x: 3, y: 2 }]));
        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Place { x: 3, y: 2 });
    }

    #[test]
    fn test_skip_with_moves_is_asked_again() {
        let board = Board::default();
        let mut human = HumanBehaviour::new(Scripted::new(&[Decision::Skip, Decision::Place { x: 5, y: 4 }]));

        assert_eq!(human.decide(&board, Occupant::Dark), Decision::Place { x: 5, y: 4 });
        assert_eq!(human.into_source().asked, 2);
    }

    #[test]
    fn test_closure_source() {
        let board = Board::default();
        let mut human = HumanBehaviour::new(|_: &Board, _: Occupant, moves: &[Cell]| {
            let last = moves[moves.len() - 1];
            Decision::Place { x: last.x(), y: last.y() }
        });

        assert_eq!(human.decide(&board, Occupant::Light), Decision::Place { x: 3, y: 5 });
        assert!(!human.is_bot());
    }
}
