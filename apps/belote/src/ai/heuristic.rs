//! Heuristic: a deterministic baseline that plays the obvious card.
//!
//! Bidding:
//! - Take the candidate with two or more cards of its suit, or with its Jack or Nine.
//!
//! Play:
//! - On lead: cash a non-trump Ace if held, else lead the cheapest card.
//! - Partner winning: feed the highest-point legal card.
//! - Otherwise: win with the cheapest card that beats the table, or discard
//!   the cheapest card when nothing wins.
//!
//! No randomness; ties go to the earliest card in the legal set.

use rand::RngCore;

use super::trait_def::{PlayerView, Strategy, StrategyError};
use crate::domain::cards_logic::card_beats;
use crate::domain::tricks::Trick;
use crate::domain::{Card, Rank, Suit};

#[derive(Debug, Clone, Copy, Default)]
pub struct Heuristic;

impl Heuristic {
    pub const NAME: &'static str = "heuristic";
    pub const VERSION: &'static str = "1.0.0";

    pub const fn new() -> Self {
        Self
    }

    fn lowest(cards: &[Card], trump: Suit) -> Option<Card> {
        cards.iter().copied().fold(None, |best, c| match best {
            Some(b) if b.points(trump) <= c.points(trump) => Some(b),
            _ => Some(c),
        })
    }

    fn highest(cards: &[Card], trump: Suit) -> Option<Card> {
        cards.iter().copied().fold(None, |best, c| match best {
            Some(b) if b.points(trump) >= c.points(trump) => Some(b),
            _ => Some(c),
        })
    }

    fn choose_lead(legal: &[Card], trump: Suit) -> Option<Card> {
        legal
            .iter()
            .copied()
            .find(|c| c.rank == Rank::Ace && c.suit != trump)
            .or_else(|| Self::lowest(legal, trump))
    }
}

impl Strategy for Heuristic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn decide_card(
        &self,
        view: &PlayerView<'_>,
        legal: &[Card],
        _rng: &mut dyn RngCore,
    ) -> Result<Card, StrategyError> {
        if legal.is_empty() {
            return Err(StrategyError::NoLegalCards);
        }
        let trump = view
            .trump
            .ok_or_else(|| StrategyError::Internal("asked to play before trump is fixed".into()))?;

        let mut table = Trick::new(trump);
        for &(player, card) in view.trick {
            table.add(player, card);
        }
        let (Some(lead), Ok((_, best))) = (table.lead_suit(), table.winning_play()) else {
            return Self::choose_lead(legal, trump).ok_or(StrategyError::NoLegalCards);
        };

        let choice = if view.partner_winning {
            Self::highest(legal, trump)
        } else {
            let winners: Vec<Card> = legal
                .iter()
                .copied()
                .filter(|&c| card_beats(c, best, lead, trump))
                .collect();
            Self::lowest(&winners, trump).or_else(|| Self::lowest(legal, trump))
        };
        choice.ok_or(StrategyError::NoLegalCards)
    }

    fn accept_candidate(
        &self,
        candidate: Card,
        view: &PlayerView<'_>,
        _rng: &mut dyn RngCore,
    ) -> Result<bool, StrategyError> {
        let same_suit: Vec<&Card> = view
            .hand
            .iter()
            .filter(|c| c.suit == candidate.suit)
            .collect();
        let holds_top = same_suit
            .iter()
            .any(|c| matches!(c.rank, Rank::Jack | Rank::Nine));
        Ok(same_suit.len() >= 2 || holds_top)
    }
}
