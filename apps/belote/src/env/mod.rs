//! Episode driver: one deal per episode, one trick per step.
//!
//! `reset` deals and plays the first trick on its own, so an episode has seven
//! steps. Actions index into the controlled player's legal set.

use std::sync::Arc;

use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::ai::RandomStrategy;
use crate::config::EngineConfig;
use crate::domain::engine::{DealEngine, DealOptions, GameRng, TrickInfo};
use crate::domain::observation::Observation;
use crate::domain::player::standard_table;
use crate::domain::rules::TRICKS_PER_DEAL;
use crate::domain::seed_derivation::derive_deal_seed;
use crate::domain::state::{Phase, Team};
use crate::errors::domain::DomainError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvError {
    #[error("step called before reset")]
    NotReset,
    #[error("episode finished, call reset")]
    EpisodeFinished,
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: u32,
    pub done: bool,
    pub info: TrickInfo,
}

pub struct BeloteEnv {
    config: EngineConfig,
    base_seed: u64,
    episodes: u64,
    engine: Option<DealEngine>,
    last_observation: Option<Observation>,
}

impl BeloteEnv {
    pub fn new(config: EngineConfig) -> Self {
        let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            config,
            base_seed,
            episodes: 0,
            engine: None,
            last_observation: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new deal and play its first trick with no action.
    ///
    /// `Some(seed)` restarts the episode counter from that base seed.
    pub fn reset(&mut self, seed: Option<u64>) -> Result<Observation, EnvError> {
        if let Some(seed) = seed {
            self.base_seed = seed;
            self.episodes = 0;
        }
        let deal_seed = derive_deal_seed(self.base_seed, self.episodes);
        self.episodes += 1;
        debug!(episode = self.episodes, deal_seed, "reset");

        let players = standard_table(Arc::new(RandomStrategy::new()));
        let options = DealOptions {
            rules: self.config.rules,
            draft_start: self.config.draft_start,
        };
        let mut engine =
            DealEngine::start(players, options, GameRng::seed_from_u64(deal_seed))?;
        let first = engine.play_next_trick(self.config.controlled_player, None)?;

        self.engine = Some(engine);
        self.last_observation = Some(first.observation);
        Ok(first.observation)
    }

    /// Play the next trick with `action` as the controlled player's choice.
    pub fn step(&mut self, action: usize) -> Result<StepResult, EnvError> {
        let engine = self.engine.as_mut().ok_or(EnvError::NotReset)?;
        if engine.phase() == Phase::Scored {
            return Err(EnvError::EpisodeFinished);
        }
        let outcome = engine.play_next_trick(self.config.controlled_player, Some(action))?;
        self.last_observation = Some(outcome.observation);
        Ok(StepResult {
            observation: outcome.observation,
            reward: outcome.reward,
            done: outcome.done,
            info: outcome.info,
        })
    }

    pub fn engine(&self) -> Option<&DealEngine> {
        self.engine.as_ref()
    }

    pub fn last_observation(&self) -> Option<&Observation> {
        self.last_observation.as_ref()
    }

    /// Episodes started since construction or the last seeded reset.
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    pub fn render(&self) -> String {
        match &self.engine {
            None => "No deal in progress".to_string(),
            Some(engine) => {
                let points = engine.team_points();
                format!(
                    "Trick {} / {} | trump {} | team one {} - team two {}",
                    engine.tricks_completed(),
                    TRICKS_PER_DEAL,
                    engine.trump(),
                    points.get(Team::One),
                    points.get(Team::Two),
                )
            }
        }
    }
}
