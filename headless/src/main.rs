//! Headless host: plays a match without a display and logs the result.
//!
//! Usage:
//!   RUST_LOG=info cargo run -p pong_headless -- --mode single --difficulty hard

use anyhow::Context;
use clap::Parser;
use pong_core::{
    Config, Events, FrameDriver, MatchConfig, MatchListener, NextFrame, PaddleIntent, Score,
    Side, Snapshot, TickError,
};

#[derive(Parser)]
#[command(name = "pong-headless")]
#[command(about = "Run a paddle match without a display")]
struct Args {
    /// easy, medium or hard (anything else plays easy)
    #[arg(long, default_value = "easy")]
    difficulty: String,

    /// "single" plays against the computer, anything else is two players
    #[arg(long, default_value = "single")]
    mode: String,

    /// Seed for the computer's reaction rolls
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,
}

/// Logs score changes instead of drawing
#[derive(Default)]
struct LogSurface {
    last_score: Score,
}

impl pong_core::RenderSurface for LogSurface {
    fn draw(&mut self, view: &Snapshot, events: &Events) {
        if view.score != self.last_score {
            tracing::info!(score = %view.score, "point");
            self.last_score = view.score;
        }
        if events.ball_hit_paddle {
            tracing::trace!(x = view.ball.pos.x, y = view.ball.pos.y, "paddle hit");
        }
    }
}

struct Announcer;

impl MatchListener for Announcer {
    fn on_match_start(&mut self, config: &MatchConfig) {
        println!(
            "Match started ({:?}, {:?})",
            config.mode, config.difficulty
        );
    }

    fn on_match_end(&mut self, winner: Side, score: Score) {
        println!("{} ({})", winner.announcement(), score);
    }

    fn on_halt(&mut self, error: &TickError) {
        eprintln!("Simulation halted: {error}");
    }
}

/// Stand-in for a human: steer toward the ball's height
fn follow_ball(view: &Snapshot, side: Side, config: &Config) -> PaddleIntent {
    let center = view.paddle(side).y + config.paddle_height / 2.0;
    let gap = view.ball.pos.y - center;
    if gap > config.paddle_speed {
        PaddleIntent::Down
    } else if gap < -config.paddle_speed {
        PaddleIntent::Up
    } else {
        PaddleIntent::Stop
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = Config::new();
    let match_config = MatchConfig::from_selection(&args.difficulty, &args.mode);

    let mut driver = FrameDriver::new(config.clone(), Box::new(Announcer), args.seed)
        .context("invalid table configuration")?;
    let mut surface = LogSurface::default();

    let mut next = driver.start(match_config);
    while next == NextFrame::Schedule {
        if driver.tick_count() >= args.max_ticks {
            tracing::warn!(ticks = args.max_ticks, "tick limit reached, abandoning match");
            break;
        }

        let view = driver.state().snapshot()?;
        let computer = driver.state().opponent().map(|o| o.side);
        for side in [Side::Left, Side::Right] {
            if computer != Some(side) {
                driver.set_paddle_intent(side, follow_ball(&view, side, &config))?;
            }
        }

        next = driver.tick(&mut surface)?;
    }

    driver.reset();
    Ok(())
}
