//! Reversi Engine Implementations
//!
//! This crate contains the computer opponents for the `reversi` board engine:
//! - `greedy`: static positional heuristic, rates each move on its own
//! - `lookahead`: greedy rate minus the opponent's best greedy reply
//!
//! Both implement [`reversi::Behaviour`]. [`AppConfig`] loads the board
//! settings, the rate weights and the opponent level from TOML.

pub mod config;
pub mod error;
pub mod greedy;
pub mod lookahead;

pub use config::AppConfig;
pub use error::ConfigError;
pub use greedy::{CellType, GreedyBehaviour, RateWeights};
pub use lookahead::LookaheadBehaviour;

use reversi::Behaviour;
use serde::{Deserialize, Serialize};

/// Strength of a computer opponent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotLevel {
    /// [`GreedyBehaviour`]
    #[default]
    Easy,
    /// [`LookaheadBehaviour`]
    Hard,
}

/// Build the behaviour for a bot level
pub fn bot(level: BotLevel, weights: RateWeights) -> Box<dyn Behaviour> {
    match level {
        BotLevel::Easy => Box::new(GreedyBehaviour::with_weights(weights)),
        BotLevel::Hard => Box::new(LookaheadBehaviour::with_weights(weights)),
    }
}
