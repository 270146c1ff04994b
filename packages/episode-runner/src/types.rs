//! Shared CLI value types.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Episode driver: one deal per episode, one trick per step.
    Episodes,
    /// Multi-deal match to the configured threshold.
    Match,
}

/// How the controlled player's action index is chosen each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Uniform over `0..ACTION_COUNT`; out-of-range indices fall back to a random legal card.
    Random,
    /// Always index 0.
    First,
}

/// Strategy seated at every chair in match mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeatKind {
    Random,
    Heuristic,
}

impl SeatKind {
    /// Registry name of the strategy.
    pub fn name(&self) -> &'static str {
        match self {
            SeatKind::Random => belote::RandomStrategy::NAME,
            SeatKind::Heuristic => belote::Heuristic::NAME,
        }
    }
}
