//! Distribution and bidding: the 3-2 deal, the candidate card, and completion
//! of every hand to eight cards.

use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info};

use crate::ai::PlayerView;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::rules::{completion_count, FIRST_PASS, SECOND_PASS};
use crate::domain::state::{seat_offset, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::DomainError;

/// Result of the candidate round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BiddingOutcome {
    pub candidate: Card,
    /// Seat of the player who took the candidate; `None` when everyone passed.
    pub taker: Option<Seat>,
    /// Always the candidate's suit.
    pub trump: Suit,
}

/// Clear every hand and deal 3 then 2 cards to each player in seating order.
pub fn deal_initial(deck: &mut Deck, players: &mut [Player]) -> Result<(), DomainError> {
    for player in players.iter_mut() {
        player.hand.clear();
    }
    for batch in [FIRST_PASS, SECOND_PASS] {
        for player in players.iter_mut() {
            let cards = deck.deal(batch)?;
            debug!(player = player.id, batch, cards = ?cards, "dealt");
            player.hand.add(cards);
        }
    }
    Ok(())
}

/// Reveal the candidate and offer it around the table starting at `draft_start`.
///
/// The first player to accept adds the candidate to their hand. When nobody
/// accepts, trump is still the candidate's suit and the candidate goes back to
/// the bottom of the deck, to be dealt during completion.
pub fn run_bidding(
    deck: &mut Deck,
    players: &mut [Player],
    draft_start: Seat,
    rng: &mut dyn RngCore,
) -> Result<BiddingOutcome, DomainError> {
    let candidate = deck.deal_one()?;
    let trump = candidate.suit;
    debug!(candidate = %candidate, draft_start, "candidate revealed");

    for i in 0..players.len() {
        let seat = seat_offset(draft_start, i as isize);
        let player = &mut players[seat];
        let view = PlayerView::bidding(player.id, seat, player.team, player.hand.cards());
        let accepted = player
            .strategy
            .accept_candidate(candidate, &view, rng)
            .map_err(|e| DomainError::strategy(player.id, e))?;
        if accepted {
            player.hand.add([candidate]);
            info!(player = player.id, trump = %trump, "candidate taken");
            return Ok(BiddingOutcome {
                candidate,
                taker: Some(seat),
                trump,
            });
        }
    }

    deck.return_to_bottom(candidate);
    info!(trump = %trump, "no taker, trump fixed to candidate suit");
    Ok(BiddingOutcome {
        candidate,
        taker: None,
        trump,
    })
}

/// Bring every hand to eight cards in seating order: two for the taker, three
/// for everyone else.
pub fn complete_hands(
    deck: &mut Deck,
    players: &mut [Player],
    taker: Option<Seat>,
) -> Result<(), DomainError> {
    for (seat, player) in players.iter_mut().enumerate() {
        let count = completion_count(taker == Some(seat));
        let cards = deck.deal(count)?;
        debug!(player = player.id, cards = ?cards, "completed");
        player.hand.add(cards);
    }
    Ok(())
}
