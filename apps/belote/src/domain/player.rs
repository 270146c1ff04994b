//! Seated players and the standard four-player table.

use std::fmt;
use std::sync::Arc;

use crate::ai::Strategy;
use crate::domain::hand::Hand;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{PlayerId, Team};

/// A seat at the table: identity, team, current hand and decision-maker.
///
/// Created once per match or episode; the hand is reset at the start of each deal.
#[derive(Clone)]
pub struct Player {
    pub id: PlayerId,
    pub team: Team,
    pub hand: Hand,
    pub strategy: Arc<dyn Strategy>,
}

impl Player {
    pub fn new(id: PlayerId, team: Team, strategy: Arc<dyn Strategy>) -> Self {
        Self {
            id,
            team,
            hand: Hand::new(),
            strategy,
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("team", &self.team)
            .field("hand", &self.hand)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {} ({:?})", self.id, self.team)
    }
}

/// Four players, ids 0..=3 in seating order, sharing one strategy.
pub fn standard_table(strategy: Arc<dyn Strategy>) -> Vec<Player> {
    (0..PLAYERS)
        .map(|seat| Player::new(seat as PlayerId, Team::from_seat(seat), Arc::clone(&strategy)))
        .collect()
}

/// Four players in seating order with one strategy per seat.
pub fn table_with(strategies: [Arc<dyn Strategy>; PLAYERS]) -> Vec<Player> {
    strategies
        .into_iter()
        .enumerate()
        .map(|(seat, strategy)| Player::new(seat as PlayerId, Team::from_seat(seat), strategy))
        .collect()
}
