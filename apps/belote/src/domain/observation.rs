//! Fixed-size numeric summary of the deal from the controlled player's seat.

use serde::Serialize;

use crate::domain::rules::{HAND_SIZE, PLAYERS, TRICKS_PER_DEAL};
use crate::domain::Suit;

/// Length of [`Observation::to_array`].
pub const OBS_SIZE: usize = 9;
/// Largest legal set a player can face: a full hand.
pub const ACTION_COUNT: usize = HAND_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Legal cards over cards in hand; 0 for an empty hand.
    pub legal_ratio: f32,
    /// Completed tricks over 8.
    pub tricks_progress: f32,
    /// Card points of the last trick over 100.
    pub trick_points: f32,
    /// Cards in hand over 8.
    pub hand_size: f32,
    /// Position in the last trick's play order over 3.
    pub play_position: f32,
    pub trump_one_hot: [f32; 4],
}

impl Observation {
    pub fn new(
        legal_count: usize,
        hand_len: usize,
        tricks_completed: u8,
        trick_points: u16,
        play_position: usize,
        trump: Suit,
    ) -> Self {
        let legal_ratio = if hand_len == 0 {
            0.0
        } else {
            legal_count as f32 / hand_len as f32
        };
        let mut trump_one_hot = [0.0; 4];
        trump_one_hot[trump.index()] = 1.0;
        Self {
            legal_ratio,
            tricks_progress: f32::from(tricks_completed) / f32::from(TRICKS_PER_DEAL),
            trick_points: f32::from(trick_points) / 100.0,
            hand_size: hand_len as f32 / HAND_SIZE as f32,
            play_position: play_position as f32 / (PLAYERS - 1) as f32,
            trump_one_hot,
        }
    }

    /// Flat layout: ratio, progress, points, hand size, position, trump one-hot.
    pub fn to_array(&self) -> [f32; OBS_SIZE] {
        let [h, d, c, s] = self.trump_one_hot;
        [
            self.legal_ratio,
            self.tricks_progress,
            self.trick_points,
            self.hand_size,
            self.play_position,
            h,
            d,
            c,
            s,
        ]
    }
}
