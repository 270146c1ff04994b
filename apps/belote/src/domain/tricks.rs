//! One round of plays under a fixed trump, its winner, and the legal-card rule.

use serde::Serialize;

use crate::domain::cards_logic::cards_points;
use crate::domain::rules::RuleConfig;
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Plays of the trick in progress, in play order.
///
/// `add` does not check legality; the deal engine filters every card through
/// [`legal_moves`] before it reaches the trick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    trump: Suit,
    plays: Vec<(PlayerId, Card)>,
}

impl Trick {
    pub fn new(trump: Suit) -> Self {
        Self {
            trump,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn add(&mut self, player: PlayerId, card: Card) {
        self.plays.push((player, card));
    }

    pub fn trump(&self) -> Suit {
        self.trump
    }

    pub fn plays(&self) -> &[(PlayerId, Card)] {
        &self.plays
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|(_, c)| c.suit)
    }

    /// Total point value of the cards played so far.
    pub fn points(&self) -> u16 {
        cards_points(self.plays.iter().map(|(_, c)| c), self.trump)
    }

    /// The play currently taking the trick.
    ///
    /// Candidates are the trump plays if any were made, else the lead-suit plays;
    /// the highest `points(trump)` wins and equal points go to the earlier play.
    pub fn winning_play(&self) -> Result<(PlayerId, Card), DomainError> {
        let lead = self.lead_suit().ok_or(DomainError::EmptyTrick)?;
        let trump = self.trump;
        let contest_suit = if self.plays.iter().any(|(_, c)| c.suit == trump) {
            trump
        } else {
            lead
        };
        self.plays
            .iter()
            .copied()
            .filter(|(_, c)| c.suit == contest_suit)
            .reduce(|best, play| {
                if play.1.points(trump) > best.1.points(trump) {
                    play
                } else {
                    best
                }
            })
            .ok_or(DomainError::EmptyTrick)
    }

    pub fn determine_winner(&self) -> Result<PlayerId, DomainError> {
        self.winning_play().map(|(player, _)| player)
    }

    /// Points of the strongest trump on the table, if any trump was played.
    pub fn best_trump_points(&self) -> Option<u16> {
        self.plays
            .iter()
            .filter(|(_, c)| c.suit == self.trump)
            .map(|(_, c)| c.points(self.trump))
            .max()
    }
}

/// A resolved trick, archived once its winner is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrickRecord {
    /// 1-based number within the deal.
    pub trick_no: u8,
    pub plays: Vec<(PlayerId, Card)>,
    pub winner: PlayerId,
    /// Card points of the trick, excluding any last-trick bonus.
    pub points: u16,
}

/// Cards `hand` may play into `trick`, in hand order.
///
/// Must follow the lead suit; when void, must trump; when void of both, any
/// card. With `rules.overtrump`, a player who must play trump has to beat the
/// best trump on the table when able, and a player void in the lead suit whose
/// partner is winning may play anything.
pub fn legal_moves(
    hand: &[Card],
    trick: &Trick,
    partner_winning: bool,
    rules: &RuleConfig,
) -> Vec<Card> {
    let Some(lead) = trick.lead_suit() else {
        return hand.to_vec();
    };
    let trump = trick.trump();

    let following = of_suit(hand, lead);
    if !following.is_empty() {
        if rules.overtrump && lead == trump {
            return higher_trumps_or_all(following, trick);
        }
        return following;
    }

    if rules.overtrump && partner_winning {
        return hand.to_vec();
    }

    let trumps = of_suit(hand, trump);
    if !trumps.is_empty() {
        if rules.overtrump {
            return higher_trumps_or_all(trumps, trick);
        }
        return trumps;
    }

    hand.to_vec()
}

fn of_suit(hand: &[Card], suit: Suit) -> Vec<Card> {
    hand.iter().copied().filter(|c| c.suit == suit).collect()
}

fn higher_trumps_or_all(trumps: Vec<Card>, trick: &Trick) -> Vec<Card> {
    let Some(best) = trick.best_trump_points() else {
        return trumps;
    };
    let higher: Vec<Card> = trumps
        .iter()
        .copied()
        .filter(|c| c.points(trick.trump()) > best)
        .collect();
    if higher.is_empty() {
        trumps
    } else {
        higher
    }
}
