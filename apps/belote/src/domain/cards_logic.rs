//! Card game logic: point values, suits in hands, comparing card strength

use super::cards_types::{Card, Rank, Suit};

/// Sum of `points` over the whole deck for any trump suit.
pub const DECK_POINTS: u16 = 152;

impl Card {
    /// Point value of the card for a deal where `trump` is the trump suit.
    ///
    /// Within a suit-group the point value is also the card's strength, which is
    /// what trick resolution compares.
    pub fn points(&self, trump: Suit) -> u16 {
        if self.suit == trump {
            match self.rank {
                Rank::Jack => 20,
                Rank::Nine => 14,
                Rank::Ace => 11,
                Rank::Ten => 10,
                Rank::King => 4,
                Rank::Queen => 3,
                Rank::Eight | Rank::Seven => 0,
            }
        } else {
            match self.rank {
                Rank::Ace => 11,
                Rank::Ten => 10,
                Rank::King => 4,
                Rank::Queen => 3,
                Rank::Jack => 2,
                Rank::Nine | Rank::Eight | Rank::Seven => 0,
            }
        }
    }
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

pub fn cards_points<'a>(cards: impl IntoIterator<Item = &'a Card>, trump: Suit) -> u16 {
    cards.into_iter().map(|c| c.points(trump)).sum()
}

/// Whether `challenger` takes the trick from the card currently winning it.
///
/// Trump beats everything else; otherwise only lead-suit cards compete. Equal
/// points never beat, so the earlier play keeps the trick.
pub fn card_beats(challenger: Card, best: Card, lead: Suit, trump: Suit) -> bool {
    let c_trump = challenger.suit == trump;
    let b_trump = best.suit == trump;
    if c_trump && !b_trump {
        return true;
    }
    if b_trump && !c_trump {
        return false;
    }
    if c_trump && b_trump {
        return challenger.points(trump) > best.points(trump);
    }
    let c_follows = challenger.suit == lead;
    let b_follows = best.suit == lead;
    if c_follows && !b_follows {
        return true;
    }
    if c_follows && b_follows {
        return challenger.points(trump) > best.points(trump);
    }
    false
}
