//! Random strategy: uniform legal choice, takes the candidate when holding its suit.

use rand::seq::IndexedRandom;
use rand::RngCore;

use super::trait_def::{PlayerView, Strategy, StrategyError};
use crate::domain::Card;

/// Baseline seat behavior.
///
/// Holds no state; all randomness is drawn from the generator passed per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub const NAME: &'static str = "random";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide_card(
        &self,
        _view: &PlayerView<'_>,
        legal: &[Card],
        rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        legal.choose(rng).copied().ok_or(StrategyError::NoLegalCards)
    }

    fn accept_candidate(
        &self,
        candidate: Card,
        view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        Ok(view.holds_suit(candidate.suit))
    }
}
