//! Episode runner CLI: drives the Belote episode environment or a full match
//! and reports per-episode results and averages.

mod metrics;
mod output;
mod runner;
mod types;

use std::path::PathBuf;
use std::time::Instant;

use belote::domain::GameRng;
use belote::telemetry::init_tracing;
use belote::{BeloteEnv, EngineConfig, Team};
use clap::Parser;
use metrics::{build_deal_metrics, summarize, DealCsvRow, EpisodeCsvRow, EpisodeMetrics};
use output::OutputWriter;
use rand::{Rng, SeedableRng};
use runner::{run_episode, run_match};
use tracing::{info, warn};
use types::{Mode, Policy, SeatKind};

#[derive(Parser, Debug)]
#[command(name = "episode-runner")]
#[command(about = "Run Belote deals through the episode environment or as a match")]
struct Args {
    /// Number of episodes to run
    #[arg(short, long, default_value = "1")]
    episodes: u32,

    /// Base seed; overrides the config file and BELOTE_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Action policy for the controlled player
    #[arg(long, value_enum, default_value = "random")]
    policy: Policy,

    #[arg(long)]
    controlled_player: Option<u8>,

    #[arg(long)]
    draft_start: Option<usize>,

    /// Require overtrumping and allow a free discard when the partner is winning
    #[arg(long)]
    overtrump: bool,

    #[arg(long)]
    last_trick_bonus: Option<u16>,

    /// JSON engine config; BELOTE_* variables and flags apply on top
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "episodes")]
    mode: Mode,

    /// Strategy at every seat in match mode
    #[arg(long, value_enum, default_value = "random")]
    seats: SeatKind,

    /// Write JSONL details and a CSV summary here
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn build_config(args: &Args) -> Result<EngineConfig, Box<dyn std::error::Error>> {
    let base = match &args.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let mut config = base.with_overrides(|key| std::env::var(key).ok())?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(p) = args.controlled_player {
        config.controlled_player = p;
    }
    if let Some(d) = args.draft_start {
        config.draft_start = d;
    }
    if args.overtrump {
        config.rules.overtrump = true;
    }
    if let Some(bonus) = args.last_trick_bonus {
        config.rules.last_trick_bonus = bonus;
    }
    Ok(config.validate()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(if args.verbose { "debug" } else { "warn" }, false);

    let mut config = build_config(&args)?;
    let base_seed = *config.seed.get_or_insert_with(|| rand::rng().random());
    info!(?config, "configuration");

    match args.mode {
        Mode::Episodes => run_episodes(&args, &config, base_seed),
        Mode::Match => run_one_match(&args, &config, base_seed),
    }
}

fn run_episodes(
    args: &Args,
    config: &EngineConfig,
    base_seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = match &args.output_dir {
        Some(dir) => Some(OutputWriter::new(dir, "episodes", args.compress)?),
        None => None,
    };
    let mut env = BeloteEnv::new(config.clone());
    let mut policy_rng = GameRng::seed_from_u64(base_seed ^ 0x5EED);
    let mut results = Vec::with_capacity(args.episodes as usize);
    let start = Instant::now();

    for episode in 1..=args.episodes {
        let episode_start = Instant::now();
        let result = match run_episode(&mut env, episode, args.policy, &mut policy_rng) {
            Ok(result) => result,
            Err(e) => {
                warn!(episode, error = %e, "episode failed");
                continue;
            }
        };
        println!(
            "Episode {episode}: {} steps, total reward {}, trick winners {:?}",
            result.steps, result.total_reward, result.trick_winners
        );
        if let Some(w) = writer.as_mut() {
            let metrics = EpisodeMetrics::new(
                &result,
                base_seed,
                episode_start.elapsed().as_secs_f64() * 1000.0,
            );
            w.write_record(&metrics, &EpisodeCsvRow::from(&metrics))?;
        }
        results.push(result);
    }

    let controlled_team = Team::from_seat(usize::from(config.controlled_player));
    let summary = summarize(&results, controlled_team);
    println!("\nStatistics over {} episodes:", summary.episodes);
    println!("  Average steps : {:.2}", summary.avg_steps);
    println!("  Average reward: {:.2}", summary.avg_reward);
    println!("  Win rate      : {:.1}%", summary.win_rate * 100.0);
    println!("  Elapsed       : {:?}", start.elapsed());

    finish_output(writer)
}

fn run_one_match(
    args: &Args,
    config: &EngineConfig,
    base_seed: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = run_match(config, args.seats, base_seed)?;
    let deals = build_deal_metrics(&result);

    let mut writer = match &args.output_dir {
        Some(dir) => Some(OutputWriter::new(dir, "match", args.compress)?),
        None => None,
    };
    for deal in &deals {
        println!(
            "Deal {}: trump {}, taker {:?}, points {:?}, totals {:?}",
            deal.deal, deal.trump, deal.taker, deal.team_points, deal.running_totals
        );
        if let Some(w) = writer.as_mut() {
            w.write_record(deal, &DealCsvRow::from(deal))?;
        }
    }

    let totals = result.scores.totals();
    match result.winner {
        Some(team) => println!(
            "\n{team:?} wins {} to {} after {} deals",
            totals.get(team),
            totals.get(team.other()),
            deals.len()
        ),
        None => println!("\nTied at {} after {} deals", totals.get(Team::One), deals.len()),
    }

    finish_output(writer)
}

fn finish_output(writer: Option<OutputWriter>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(w) = writer {
        let (jsonl, csv) = w.output_paths();
        let (jsonl, csv) = (jsonl.to_path_buf(), csv.to_path_buf());
        w.finish()?;
        println!("Results written to {} and {}", jsonl.display(), csv.display());
    }
    Ok(())
}
