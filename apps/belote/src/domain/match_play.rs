//! Multi-deal match: deals are played until a team reaches the threshold.

use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::info;

use crate::config::EngineConfig;
use crate::domain::engine::{DealEngine, DealOptions, DealResult, GameRng};
use crate::domain::player::Player;
use crate::domain::rules::{RuleConfig, PLAYERS};
use crate::domain::scoring::TeamScores;
use crate::domain::state::{next_seat, Seat, Team};
use crate::errors::domain::DomainError;

/// Running match totals, updated only between deals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchScores {
    totals: TeamScores,
    deals_played: u32,
}

impl MatchScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, deal: TeamScores) {
        self.totals += deal;
        self.deals_played += 1;
    }

    pub fn totals(&self) -> TeamScores {
        self.totals
    }

    pub fn deals_played(&self) -> u32 {
        self.deals_played
    }

    pub fn reached(&self, threshold: u32) -> bool {
        Team::ALL.iter().any(|&t| self.totals.get(t) >= threshold)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub scores: MatchScores,
    pub deals: Vec<DealResult>,
    /// Team with the higher total; `None` on an exact tie at the threshold.
    pub winner: Option<Team>,
}

pub struct Match {
    players: Vec<Player>,
    rules: RuleConfig,
    threshold: u32,
    draft_start: Seat,
    rng: GameRng,
}

impl Match {
    pub fn new(players: Vec<Player>, config: &EngineConfig, rng: GameRng) -> Self {
        Self {
            players,
            rules: config.rules,
            threshold: config.match_threshold,
            draft_start: config.draft_start % PLAYERS,
            rng,
        }
    }

    /// Play deals until either team reaches the threshold.
    ///
    /// At least one deal is always played. Every deal counts, including deals
    /// where nobody took the candidate. The draft start moves one seat after
    /// each deal.
    pub fn play(mut self) -> Result<MatchResult, DomainError> {
        let mut scores = MatchScores::new();
        let mut deals = Vec::new();
        let mut players = std::mem::take(&mut self.players);

        loop {
            let options = DealOptions {
                rules: self.rules,
                draft_start: self.draft_start,
            };
            let deal_rng = GameRng::seed_from_u64(self.rng.next_u64());
            let mut engine = DealEngine::start(players, options, deal_rng)?;
            let result = engine.play_out()?;
            players = engine.into_players();

            scores.record(result.team_points);
            info!(
                deal = scores.deals_played(),
                taker = ?result.taker,
                team_one = scores.totals().get(Team::One),
                team_two = scores.totals().get(Team::Two),
                "deal recorded"
            );
            deals.push(result);
            self.draft_start = next_seat(self.draft_start);

            if scores.reached(self.threshold) {
                break;
            }
        }

        let winner = scores.totals().leader();
        info!(winner = ?winner, deals = deals.len(), "match finished");
        Ok(MatchResult {
            scores,
            deals,
            winner,
        })
    }
}
