//! Domain-level error type used across the engine, the episode driver and the
//! match loop.
//!
//! Every variant except `ParseCard` signals a broken engine invariant and is
//! propagated straight to the caller; there is no retry path.

use thiserror::Error;

use crate::ai::StrategyError;
use crate::domain::state::{Phase, PlayerId};
use crate::domain::Card;

/// Central domain error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The deck was asked for more cards than it holds.
    #[error("insufficient cards: requested {requested}, {remaining} remaining")]
    InsufficientCards { requested: usize, remaining: usize },
    /// A hand was asked to give up a card it does not hold.
    #[error("card not in hand: {0}")]
    CardNotFound(Card),
    /// Winner resolution on a trick with no plays.
    #[error("cannot resolve an empty trick")]
    EmptyTrick,
    /// A strategy picked a card outside the legal set.
    #[error("player {player} played illegal card {card}")]
    IllegalPlay { player: PlayerId, card: Card },
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),
    #[error("invalid table: {0}")]
    InvalidTable(String),
    #[error("phase mismatch: expected {expected}, found {actual:?}")]
    PhaseMismatch {
        expected: &'static str,
        actual: Phase,
    },
    #[error("strategy failed for player {player}: {source}")]
    Strategy {
        player: PlayerId,
        #[source]
        source: StrategyError,
    },
    #[error("parse card: {0}")]
    ParseCard(String),
}

impl DomainError {
    pub fn phase_mismatch(expected: &'static str, actual: Phase) -> Self {
        Self::PhaseMismatch { expected, actual }
    }

    pub fn strategy(player: PlayerId, source: StrategyError) -> Self {
        Self::Strategy { player, source }
    }
}
