use std::ops::AddAssign;

use serde::Serialize;

use crate::domain::cards_logic::DECK_POINTS;
use crate::domain::rules::{RuleConfig, TEAMS};
use crate::domain::state::Team;

/// Points per team. Used for the running total of a deal and, across deals,
/// as the match accumulator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamScores {
    points: [u32; TEAMS],
}

impl TeamScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, team: Team, points: u32) {
        self.points[team.index()] += points;
    }

    pub fn get(&self, team: Team) -> u32 {
        self.points[team.index()]
    }

    pub fn total(&self) -> u32 {
        self.points.iter().sum()
    }

    /// Team strictly ahead, or `None` on a tie.
    pub fn leader(&self) -> Option<Team> {
        let (one, two) = (self.get(Team::One), self.get(Team::Two));
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Team::One),
            std::cmp::Ordering::Less => Some(Team::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_array(&self) -> [u32; TEAMS] {
        self.points
    }
}

impl AddAssign for TeamScores {
    fn add_assign(&mut self, other: Self) {
        for team in Team::ALL {
            self.add(team, other.get(team));
        }
    }
}

/// Points a complete deal distributes between the two teams.
pub fn deal_total(rules: &RuleConfig) -> u32 {
    u32::from(DECK_POINTS) + u32::from(rules.last_trick_bonus)
}
