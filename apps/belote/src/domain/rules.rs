//! Fixed table and distribution constants for a four-player deal, plus the
//! optional rule variants.

use serde::{Deserialize, Serialize};

pub const PLAYERS: usize = 4;
pub const TEAMS: usize = 2;
pub const DECK_SIZE: usize = 32;
pub const HAND_SIZE: usize = 8;
pub const TRICKS_PER_DEAL: u8 = 8;

/// Distribution before the candidate is revealed: 3 then 2 cards per player.
pub const FIRST_PASS: usize = 3;
pub const SECOND_PASS: usize = 2;

/// Cards each player holds when bidding starts.
pub const CARDS_BEFORE_BIDDING: usize = FIRST_PASS + SECOND_PASS;

/// Cards still owed to a player after bidding.
pub fn completion_count(took_candidate: bool) -> usize {
    if took_candidate {
        HAND_SIZE - CARDS_BEFORE_BIDDING - 1
    } else {
        HAND_SIZE - CARDS_BEFORE_BIDDING
    }
}

/// Cards the deck must provide for one deal when a player takes the candidate.
pub const fn cards_used_with_taker() -> usize {
    PLAYERS * CARDS_BEFORE_BIDDING + 1 + (HAND_SIZE - CARDS_BEFORE_BIDDING - 1)
        + (PLAYERS - 1) * (HAND_SIZE - CARDS_BEFORE_BIDDING)
}

/// Optional rules on top of the basic follow-suit / must-trump policy.
///
/// The default plays without either refinement, which keeps a deal worth
/// exactly [`DECK_POINTS`](crate::domain::cards_logic::DECK_POINTS).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Require beating the best trump on the table when playing trump, and
    /// allow a free discard when void while the partner is winning.
    pub overtrump: bool,
    /// Extra points for the team taking the last trick (10 in standard Belote).
    pub last_trick_bonus: u16,
}

impl RuleConfig {
    /// Standard Belote: overtrump obligation and the 10-point last trick.
    pub fn strict() -> Self {
        Self {
            overtrump: true,
            last_trick_bonus: 10,
        }
    }
}
