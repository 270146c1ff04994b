//! The 32-card deck: canonical order, shuffling and dealing without replacement.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_types::{Card, Rank, Suit};
use super::rules::DECK_SIZE;
use crate::errors::domain::DomainError;

/// Ordered stock of cards still to be dealt.
///
/// Only shrinks, except for [`Deck::return_to_bottom`], which puts back a card
/// that was previously dealt from this deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Full deck in canonical order: suits outer, ranks inner.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card { suit, rank });
            }
        }
        Self { cards }
    }

    /// Fisher-Yates permutation of the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the first `count` cards in current order.
    pub fn deal(&mut self, count: usize) -> Result<Vec<Card>, DomainError> {
        if count > self.cards.len() {
            return Err(DomainError::InsufficientCards {
                requested: count,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..count).collect())
    }

    /// Deal exactly one card.
    pub fn deal_one(&mut self) -> Result<Card, DomainError> {
        if self.cards.is_empty() {
            return Err(DomainError::InsufficientCards {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    pub fn return_to_bottom(&mut self, card: Card) {
        debug_assert!(!self.cards.contains(&card), "card already in deck");
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
