#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Belote single-deal rules engine with an episode driver and a match loop.

pub mod ai;
pub mod config;
pub mod domain;
pub mod env;
pub mod errors;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

pub use ai::{ExternalStrategy, Heuristic, PlayerView, RandomStrategy, Strategy, StrategyError};
pub use config::{ConfigError, EngineConfig};
pub use domain::{
    Card, DealEngine, DealOptions, DealResult, GameRng, Match, MatchResult, MatchScores,
    Observation, Rank, RuleConfig, Suit, Team,
};
pub use env::{BeloteEnv, EnvError, StepResult};
pub use errors::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
