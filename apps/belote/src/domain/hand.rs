//! A player's cards.

use super::cards_logic::hand_has_suit;
use super::cards_types::{Card, Suit};
use crate::errors::domain::DomainError;

/// Cards held by one player, kept in the order they were received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Remove one occurrence of `card`.
    pub fn remove(&mut self, card: Card) -> Result<(), DomainError> {
        let pos = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(DomainError::CardNotFound(card))?;
        self.cards.remove(pos);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        hand_has_suit(&self.cards, suit)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
