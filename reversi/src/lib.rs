//! Core types and game logic for Reversi (Othello)
//!
//! The board engine computes legal moves, resolves captures and keeps an
//! undo history. Move choice lives behind the [`Behaviour`] trait; the
//! computer opponents are implemented in the `reversi_engines` crate.

pub mod board;
pub mod config;
pub mod decision;
pub mod error;
pub mod human;
pub mod player;

pub use board::Board;
pub use config::BoardConfig;
pub use decision::Decision;
pub use error::BoardError;
pub use human::{HumanBehaviour, MoveSource};
pub use player::{Behaviour, Player};

/// Occupant of a single board position
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Occupant {
    Empty,
    Dark,
    Light,
}

impl Occupant {
    /// Get the opposing color. `Empty` has no opponent and maps to itself.
    pub fn opponent(&self) -> Occupant {
        match self {
            Occupant::Dark => Occupant::Light,
            Occupant::Light => Occupant::Dark,
            Occupant::Empty => Occupant::Empty,
        }
    }

    /// True for `Dark` and `Light`
    pub fn is_disk(&self) -> bool {
        *self != Occupant::Empty
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Occupant::Empty => "empty",
            Occupant::Dark => "dark",
            Occupant::Light => "light",
        }
    }
}

/// A single board position
///
/// Identity is positional: two cells compare equal when they have the same
/// `(x, y)`, whatever their occupants.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    x: usize,
    y: usize,
    pub(crate) occupant: Occupant,
}

impl Cell {
    pub(crate) fn new(x: usize, y: usize, occupant: Occupant) -> Self {
        Cell { x, y, occupant }
    }

    /// Column, 0-indexed
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row, 0-indexed
    pub fn y(&self) -> usize {
        self.y
    }

    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant == Occupant::Empty
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}
