//! Externally controlled seat: the decision is an index supplied per call.

use rand::seq::IndexedRandom;
use rand::RngCore;

use super::trait_def::{PlayerView, Strategy, StrategyError};
use crate::domain::Card;

/// Plays `legal[action]`, or a uniformly random legal card when `action` is
/// out of range. Never fails on a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalStrategy {
    action: usize,
}

impl ExternalStrategy {
    pub const NAME: &'static str = "external";

    pub const fn new(action: usize) -> Self {
        Self { action }
    }

    pub fn action(&self) -> usize {
        self.action
    }
}

impl Strategy for ExternalStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide_card(
        &self,
        _view: &PlayerView<'_>,
        legal: &[Card],
        rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        if let Some(card) = legal.get(self.action) {
            return Ok(*card);
        }
        tracing::debug!(
            action = self.action,
            legal = legal.len(),
            "action out of range, falling back to random legal card"
        );
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
