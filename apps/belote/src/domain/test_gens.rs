// Proptest generators for domain types.
// Cards are always drawn without replacement from the 32-card deck.

use proptest::prelude::*;

use crate::domain::{Card, Deck, PlayerId, Suit};

pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// `count` distinct cards in random order.
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(Deck::new().cards().to_vec())
        .prop_shuffle()
        .prop_map(move |mut cards| {
            cards.truncate(count);
            cards
        })
}

/// A hand of 1..=8 distinct cards.
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=8).prop_flat_map(unique_cards)
}

pub fn player_id() -> impl Strategy<Value = PlayerId> {
    0u8..=3u8
}

/// Four plays of distinct cards starting from a random leader.
pub fn complete_trick() -> impl Strategy<Value = Vec<(PlayerId, Card)>> {
    (player_id(), unique_cards(4)).prop_map(|(leader, cards)| {
        cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| ((leader + i as u8) % 4, card))
            .collect()
    })
}

/// A hand and a partial trick (1..=3 plays) sharing no card.
pub fn hand_and_partial_trick() -> impl Strategy<Value = (Vec<Card>, Vec<(PlayerId, Card)>)> {
    (1usize..=8, 1usize..=3).prop_flat_map(|(hand_len, plays)| {
        unique_cards(hand_len + plays).prop_map(move |cards| {
            let (hand, table) = cards.split_at(hand_len);
            let plays = table
                .iter()
                .enumerate()
                .map(|(i, &c)| (i as PlayerId, c))
                .collect();
            (hand.to_vec(), plays)
        })
    })
}

pub fn seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}
