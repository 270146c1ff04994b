use serde::Serialize;

use crate::domain::rules::PLAYERS;

pub type PlayerId = u8;
/// Index into the table's seating order (0..PLAYERS).
pub type Seat = usize;

/// Phases of a single deal, in order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Fresh deck, hands being filled to five cards.
    Dealing,
    /// Candidate revealed; players are asked in turn whether to take it.
    Bidding,
    /// Trump fixed; hands are brought up to eight cards.
    Completing,
    /// Playing tricks; `trick_no` is the 1-based number of the next trick.
    Playing { trick_no: u8 },
    /// All tricks resolved; team points are final.
    Scored,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    /// Partners sit opposite each other: seats 0 and 2, seats 1 and 3.
    pub fn from_seat(seat: Seat) -> Self {
        if seat % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Seat / turn math helpers.
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: isize) -> Seat {
    (seat as isize + delta).rem_euclid(PLAYERS as isize) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// Seats in play order for a trick led from `leader`.
pub fn play_order(leader: Seat) -> impl Iterator<Item = Seat> {
    (0..PLAYERS).map(move |i| seat_offset(leader, i as isize))
}

/// Position of `seat` within the play order of a trick led from `leader`.
#[inline]
pub fn position_from(leader: Seat, seat: Seat) -> usize {
    seat_offset(seat, -(leader as isize))
}
