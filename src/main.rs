//! Terminal falling-block game (default binary).
//!
//! Uses crossterm for input and a framebuffer-based renderer.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};

use tui_blockfall::core::{Engine, EngineConfig, PieceRule};
use tui_blockfall::input::{action_for, should_quit};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

#[derive(Parser, Debug)]
#[command(
    name = "tui-blockfall",
    version,
    about = "Falling-block puzzle game for the terminal"
)]
struct Args {
    /// Board width in cells (4..=64).
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u16,

    /// Board height in cells (4..=64).
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u16,

    /// Piece sequence seed. Omit for a random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Piece rule: uniform | bag7
    #[arg(long, default_value = "uniform")]
    piece_rule: String,

    /// Terminal columns per board cell.
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..=4))]
    cell_width: u16,
}

impl Args {
    fn engine_config(&self) -> Result<EngineConfig> {
        let piece_rule = PieceRule::from_str(&self.piece_rule).with_context(|| {
            format!(
                "unknown piece rule {:?} (expected uniform or bag7)",
                self.piece_rule
            )
        })?;
        let mut config = EngineConfig::default()
            .with_size(self.width, self.height)
            .with_piece_rule(piece_rule);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let engine = Engine::try_new(args.engine_config()?)?;
    let view = GameView::new(args.cell_width, 1);

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, engine, &view);
    // Always try to restore terminal state.
    let _ = term.exit();

    let engine = result?;
    println!(
        "{} | score {} | lines {} | level {} | seed {}",
        engine.status().as_str(),
        engine.final_score().unwrap_or(engine.score()),
        engine.lines(),
        engine.level(),
        engine.seed(),
    );
    Ok(())
}

/// Runs until the player quits, then hands the engine back for the summary.
fn run(term: &mut TerminalRenderer, mut engine: Engine, view: &GameView) -> Result<Engine> {
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = engine.snapshot();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        engine.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(engine);
                    }
                    if let Some(action) = action_for(key) {
                        engine.apply_action(action);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= tick {
            last_tick = Instant::now();
            engine.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}
