//! Seat decision-makers.
//!
//! - `Strategy`: the interface the deal engine consults for bidding and play
//! - `RandomStrategy`: uniform legal play, takes the candidate on a matching suit
//! - `ExternalStrategy`: the externally controlled seat, one action per call
//! - `Heuristic`: deterministic baseline
//! - `registry`: strategies by name

mod external;
mod heuristic;
mod random;
pub mod registry;
mod trait_def;

pub use external::ExternalStrategy;
pub use heuristic::Heuristic;
pub use random::RandomStrategy;
pub use registry::{by_name, registered_strategies, StrategyFactory};
pub use trait_def::{PlayerView, Strategy, StrategyError};
