//! Strategy trait definition.

use rand::RngCore;
use thiserror::Error;

use crate::domain::scoring::TeamScores;
use crate::domain::state::{PlayerId, Seat, Team};
use crate::domain::{Card, Suit};

/// Errors a strategy can report instead of a decision.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// Asked to play with an empty legal set.
    #[error("no legal cards to choose from")]
    NoLegalCards,
    #[error("strategy internal error: {0}")]
    Internal(String),
}

/// What a seated player can see when asked for a decision.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub player: PlayerId,
    pub seat: Seat,
    pub team: Team,
    pub hand: &'a [Card],
    /// `None` while the candidate is still on offer.
    pub trump: Option<Suit>,
    /// Plays of the current trick so far, in play order.
    pub trick: &'a [(PlayerId, Card)],
    /// The partner currently holds the best card of the trick.
    pub partner_winning: bool,
    pub tricks_completed: u8,
    pub team_points: TeamScores,
}

impl<'a> PlayerView<'a> {
    /// View used during bidding: no trump, no trick, no points yet.
    pub fn bidding(player: PlayerId, seat: Seat, team: Team, hand: &'a [Card]) -> Self {
        Self {
            player,
            seat,
            team,
            hand,
            trump: None,
            trick: &[],
            partner_winning: false,
            tricks_completed: 0,
            team_points: TeamScores::new(),
        }
    }

    pub fn holds_suit(&self, suit: Suit) -> bool {
        self.hand.iter().any(|c| c.suit == suit)
    }
}

/// A decision-maker bound to a seat.
///
/// Randomness comes from the caller's generator so that a seeded engine stays
/// reproducible whatever strategies are seated.
pub trait Strategy: Send + Sync {
    /// Stable identifier used by the registry and in logs.
    fn name(&self) -> &'static str;

    /// Pick one card of `legal`. Returning a card outside `legal` is rejected
    /// by the engine.
    fn decide_card(
        &self,
        view: &PlayerView<'_>,
        legal: &[Card],
        rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError>;

    /// Whether to take `candidate`, fixing its suit as trump.
    fn accept_candidate(
        &self,
        candidate: Card,
        view: &PlayerView<'_>,
        rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError>;
}
