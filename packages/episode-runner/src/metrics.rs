//! Per-episode and per-deal records plus run summaries.

use belote::domain::{DealResult, MatchResult};
use belote::Team;
use serde::Serialize;

use crate::runner::EpisodeResult;

/// One JSONL line per episode.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeMetrics {
    pub episode: u32,
    pub seed: u64,
    pub steps: u32,
    pub total_reward: u32,
    pub trump: String,
    pub taker: Option<u8>,
    pub trick_winners: Vec<u8>,
    pub team_points: [u32; 2],
    pub duration_ms: f64,
}

impl EpisodeMetrics {
    pub fn new(result: &EpisodeResult, seed: u64, duration_ms: f64) -> Self {
        Self {
            episode: result.episode,
            seed,
            steps: result.steps,
            total_reward: result.total_reward,
            trump: result.trump.name().to_string(),
            taker: result.taker,
            trick_winners: result.trick_winners.clone(),
            team_points: result.team_points,
            duration_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EpisodeCsvRow {
    pub episode: u32,
    pub steps: u32,
    pub total_reward: u32,
    pub trump: String,
    pub team_one: u32,
    pub team_two: u32,
}

impl From<&EpisodeMetrics> for EpisodeCsvRow {
    fn from(m: &EpisodeMetrics) -> Self {
        Self {
            episode: m.episode,
            steps: m.steps,
            total_reward: m.total_reward,
            trump: m.trump.clone(),
            team_one: m.team_points[0],
            team_two: m.team_points[1],
        }
    }
}

/// One JSONL line per deal of a match.
#[derive(Debug, Clone, Serialize)]
pub struct DealMetrics {
    pub deal: u32,
    pub trump: String,
    pub candidate: String,
    pub taker: Option<u8>,
    pub team_points: [u32; 2],
    pub running_totals: [u32; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct DealCsvRow {
    pub deal: u32,
    pub trump: String,
    pub taker: String,
    pub team_one: u32,
    pub team_two: u32,
}

impl From<&DealMetrics> for DealCsvRow {
    fn from(m: &DealMetrics) -> Self {
        Self {
            deal: m.deal,
            trump: m.trump.clone(),
            taker: m
                .taker
                .map(|t| t.to_string())
                .unwrap_or_else(|| "none".to_string()),
            team_one: m.team_points[0],
            team_two: m.team_points[1],
        }
    }
}

pub fn build_deal_metrics(result: &MatchResult) -> Vec<DealMetrics> {
    let mut running = [0u32; 2];
    result
        .deals
        .iter()
        .enumerate()
        .map(|(i, deal)| deal_metrics(i as u32 + 1, deal, &mut running))
        .collect()
}

fn deal_metrics(deal_no: u32, deal: &DealResult, running: &mut [u32; 2]) -> DealMetrics {
    let points = deal.team_points.as_array();
    running[0] += points[0];
    running[1] += points[1];
    DealMetrics {
        deal: deal_no,
        trump: deal.trump.name().to_string(),
        candidate: deal.candidate.token(),
        taker: deal.taker,
        team_points: points,
        running_totals: *running,
    }
}

/// Averages over a batch of episodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub episodes: u32,
    pub avg_steps: f64,
    pub avg_reward: f64,
    /// Share of episodes where the controlled team outscored the other.
    pub win_rate: f64,
}

pub fn summarize(results: &[EpisodeResult], controlled_team: Team) -> EpisodeSummary {
    if results.is_empty() {
        return EpisodeSummary {
            episodes: 0,
            avg_steps: 0.0,
            avg_reward: 0.0,
            win_rate: 0.0,
        };
    }
    let n = results.len() as f64;
    let steps: u64 = results.iter().map(|r| u64::from(r.steps)).sum();
    let reward: u64 = results.iter().map(|r| u64::from(r.total_reward)).sum();
    let ours = controlled_team.index();
    let theirs = controlled_team.other().index();
    let wins = results
        .iter()
        .filter(|r| r.team_points[ours] > r.team_points[theirs])
        .count();
    EpisodeSummary {
        episodes: results.len() as u32,
        avg_steps: steps as f64 / n,
        avg_reward: reward as f64 / n,
        win_rate: wins as f64 / n,
    }
}
