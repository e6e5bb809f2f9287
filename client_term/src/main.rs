//! Terminal client for two-player Pong
//!
//! Left player: Q (up) / A (down). Right player: P (up) / L (down).
//! B pauses, Esc or Ctrl-C quits. Logs go to stderr; redirect them with
//! `2>pong.log` to keep them off the board.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::Parser;
use client_term::driver;
use game_core::{Config, Match};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pong", about = "Two-player Pong in the terminal")]
struct Args {
    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Pixels a paddle moves per tick
    #[arg(long)]
    paddle_step: Option<f32>,

    /// Initial horizontal ball velocity (pixels per tick)
    #[arg(long, allow_negative_numbers = true)]
    ball_dx: Option<f32>,

    /// Initial vertical ball velocity (pixels per tick)
    #[arg(long, allow_negative_numbers = true)]
    ball_dy: Option<f32>,

    /// Run without a terminal UI and print one JSON snapshot per tick
    #[arg(long)]
    headless: bool,

    /// Number of ticks to simulate in headless mode
    #[arg(long, default_value_t = 500, requires = "headless")]
    ticks: u64,
}

impl Args {
    fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            tick_interval_ms: self.tick_ms.unwrap_or(defaults.tick_interval_ms),
            paddle_step: self.paddle_step.unwrap_or(defaults.paddle_step),
            ball_start_dx: self.ball_dx.unwrap_or(defaults.ball_start_dx),
            ball_start_dy: self.ball_dy.unwrap_or(defaults.ball_start_dy),
            ..defaults
        }
    }
}

fn init_tracing(headless: bool) {
    // Log lines written to the same tty would tear the board apart
    let default_level = if headless || !std::io::stderr().is_terminal() {
        "info"
    } else {
        "off"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.headless);

    let game = Match::new(args.config()).context("invalid game configuration")?;

    if args.headless {
        let stdout = std::io::stdout();
        let mut out = std::io::BufWriter::new(stdout.lock());
        let mut game = game;
        driver::run_headless(&mut game, args.ticks, &mut out)
    } else {
        driver::run_interactive(game).await
    }
}
