//! Headless 3D Pong runner
//!
//! Plays the gameplay core frame by frame with bots on the human controls
//! and logs scores and wins. `RUST_LOG=debug` shows paddle and wall hits.

mod simulation;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pong3d_core::{Config, Opponent};

use crate::simulation::LocalGame;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run the 3D Pong simulation without a renderer", long_about = None)]
struct Args {
    /// Number of frames to simulate (60 per second of game time)
    #[arg(long, default_value_t = 3600)]
    frames: u32,

    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,

    /// Drive the far paddle as player 2 instead of the AI
    #[arg(long)]
    two_player: bool,

    /// Enable the spectator camera orbit
    #[arg(long)]
    orbit: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::new(),
    };
    if args.two_player {
        config.opponent = Opponent::Human;
    }

    log::info!(
        "Simulating {} frames, opponent {:?}, first to {}",
        args.frames,
        config.opponent,
        config.limit_score
    );

    let mut game = LocalGame::new(config);
    if args.orbit {
        game.orbit.toggle();
    }

    let mut rallies = 0u32;
    for _ in 0..args.frames {
        let events = game.step();
        if events.ball_hit_player_paddle || events.ball_hit_ai_paddle {
            rallies += 1;
        }
    }

    log::info!(
        "Finished at {:.1}s: Player {} - AI {}, {} paddle hits, {} matches won",
        game.time.now,
        game.score.player,
        game.score.ai,
        rallies,
        game.display.wins.len()
    );
    if args.orbit {
        log::info!("Camera ended at {}", game.camera.position);
    }

    Ok(())
}
