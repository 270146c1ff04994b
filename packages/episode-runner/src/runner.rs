//! Episode and match execution on top of the engine.

use belote::domain::{standard_table, GameRng, Match, MatchResult, ACTION_COUNT};
use belote::{BeloteEnv, EngineConfig, EnvError, Suit};
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{Policy, SeatKind};

#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeResult {
    pub episode: u32,
    pub steps: u32,
    pub total_reward: u32,
    pub trick_winners: Vec<u8>,
    pub team_points: [u32; 2],
    pub trump: Suit,
    pub taker: Option<u8>,
}

pub fn choose_action<R: Rng>(policy: Policy, rng: &mut R) -> usize {
    match policy {
        Policy::Random => rng.random_range(0..ACTION_COUNT),
        Policy::First => 0,
    }
}

/// Reset, then step until the deal is done.
pub fn run_episode<R: Rng>(
    env: &mut BeloteEnv,
    episode: u32,
    policy: Policy,
    rng: &mut R,
) -> Result<EpisodeResult, EnvError> {
    env.reset(None)?;
    let mut steps = 0;
    let mut total_reward = 0;
    let mut trick_winners = Vec::new();

    loop {
        let action = choose_action(policy, rng);
        let result = env.step(action)?;
        steps += 1;
        total_reward += result.reward;
        debug!(episode, step = steps, action, reward = result.reward, "step");
        if result.done {
            break;
        }
    }

    let engine = env.engine().ok_or(EnvError::NotReset)?;
    trick_winners.extend(engine.completed_tricks().iter().map(|t| t.winner));
    Ok(EpisodeResult {
        episode,
        steps,
        total_reward,
        trick_winners,
        team_points: engine.team_points().as_array(),
        trump: engine.trump(),
        taker: engine.taker(),
    })
}

/// Play one match with every seat using `seats`.
pub fn run_match(
    config: &EngineConfig,
    seats: SeatKind,
    seed: u64,
) -> Result<MatchResult, Box<dyn std::error::Error>> {
    let factory = belote::ai::by_name(seats.name())
        .ok_or_else(|| format!("unknown strategy: {}", seats.name()))?;
    let players = standard_table((factory.make)());
    let result = Match::new(players, config, GameRng::seed_from_u64(seed)).play()?;
    Ok(result)
}
