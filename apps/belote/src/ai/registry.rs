//! How to register a strategy
//!
//! 1) Implement `Strategy` for your type in its module.
//! 2) Add a `StrategyFactory` entry to the static list with a stable `name` and `version`.
//! 3) Keep ordering stable; constructors must not have side effects.

use std::sync::Arc;

use crate::ai::{Heuristic, RandomStrategy, Strategy};

/// Named constructor for a seatable strategy.
pub struct StrategyFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn() -> Arc<dyn Strategy>,
}

static STRATEGY_FACTORIES: &[StrategyFactory] = &[
    StrategyFactory {
        name: RandomStrategy::NAME,
        version: RandomStrategy::VERSION,
        make: make_random,
    },
    StrategyFactory {
        name: Heuristic::NAME,
        version: Heuristic::VERSION,
        make: make_heuristic,
    },
];

pub fn registered_strategies() -> &'static [StrategyFactory] {
    STRATEGY_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static StrategyFactory> {
    registered_strategies()
        .iter()
        .find(|factory| factory.name == name)
}

fn make_random() -> Arc<dyn Strategy> {
    Arc::new(RandomStrategy::new())
}

fn make_heuristic() -> Arc<dyn Strategy> {
    Arc::new(Heuristic::new())
}
