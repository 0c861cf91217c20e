//! Fruit Merge entry point
//!
//! Headless driver: runs the fixed-rate tick loop with a seeded autoplayer
//! standing in for pointer input, then reports the session.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use fruit_merge::renderer::build_frame;
use fruit_merge::sim::{GamePhase, GameState, SimEvent, TickInput, tick};
use fruit_merge::{Settings, SettingsError, Snapshot};

/// Headless merge-fruits simulation
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON settings file (defaults are used for missing fields)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Override the tick budget
    #[arg(long)]
    ticks: Option<u64>,
    /// Seed for the autoplayer's aim
    #[arg(long, default_value_t = 1)]
    player_seed: u64,
    /// Ticks the autoplayer waits before launching each body
    #[arg(long, default_value_t = 20)]
    aim_ticks: u32,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

/// Random aiming, launching once a body has been pending for a while
struct AutoPlayer {
    rng: Pcg32,
    aim_ticks: u32,
    waited: u32,
}

impl AutoPlayer {
    fn new(seed: u64, aim_ticks: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            aim_ticks,
            waited: 0,
        }
    }

    fn input(&mut self, state: &GameState) -> TickInput {
        if state.phase() != GamePhase::Aiming {
            self.waited = 0;
            return TickInput::default();
        }
        self.waited += 1;
        if self.waited < self.aim_ticks {
            return TickInput::default();
        }
        self.waited = 0;

        let arena = state.arena;
        let aim = Vec2::new(
            self.rng.random_range(0.0..arena.width),
            self.rng.random_range(0.0..arena.height * 0.6),
        );
        TickInput {
            aim: Some(aim),
            launch: true,
            restart: false,
        }
    }
}

fn load_settings(args: &Args) -> Result<Settings, SettingsError> {
    let mut settings = match &args.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(ticks) = args.ticks {
        settings.max_ticks = ticks;
    }
    settings.validate()?;
    Ok(settings)
}

fn run(args: &Args) -> Result<(), SettingsError> {
    let settings = load_settings(args)?;
    let mut state = settings.build_state()?;
    let mut player = AutoPlayer::new(args.player_seed, args.aim_ticks);

    log::info!(
        "Fruit Merge (headless) starting: seed={}, {} ticks at {} Hz",
        settings.seed,
        settings.max_ticks,
        settings.tick_hz
    );

    let report_every = u64::from(settings.tick_hz) * 10;
    let mut launches = 0u32;
    let mut merges = 0u32;
    let mut ticks_run = 0u64;

    while ticks_run < settings.max_ticks && !state.is_over() {
        let input = player.input(&state);
        tick(&mut state, &input);
        ticks_run += 1;

        for event in &state.events {
            match event {
                SimEvent::Launched { .. } => launches += 1,
                SimEvent::Merged { .. } => merges += 1,
                SimEvent::WallHit { .. }
                | SimEvent::Spawned { .. }
                | SimEvent::GameOver { .. } => {}
            }
        }

        if ticks_run % report_every == 0 {
            log::info!(
                "t={:.0}s bodies={} score={} fill={:.1}%",
                ticks_run as f32 * settings.tick_interval(),
                state.bodies.len(),
                state.score(),
                state.occupancy
            );
        }
    }

    let snapshot = Snapshot::capture(&state);
    let frame = build_frame(&snapshot);
    log::debug!(
        "Final frame: {} triangles, {} bytes",
        frame.triangle_count(),
        frame.bytes().len()
    );

    println!(
        "ticks={} launches={} merges={} bodies={} score={} fill={:.1}% over={}",
        ticks_run,
        launches,
        merges,
        snapshot.bodies.len(),
        snapshot.score,
        snapshot.occupancy,
        snapshot.is_over
    );

    if args.json {
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode snapshot: {e}"),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
