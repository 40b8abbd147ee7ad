//! Core game logic - pure, deterministic and testable
//!
//! This crate holds every rule of the game and nothing else. There is no I/O,
//! no clock and no global state: a host owns an [`Engine`], feeds it elapsed
//! time and player commands, and reads state back for drawing.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece templates (matrix + color tag)
//! - [`piece`]: the falling piece as a value with pure rotate/translate
//! - [`board`]: the W x H grid with collision checks, merging and row clearing
//! - [`scoring`]: line clear points, levels and gravity intervals
//! - [`rng`]: next-piece selection (uniform by default, optional 7-bag)
//! - [`config`]: board size, seed and piece rule
//! - [`engine`]: the state machine that sequences everything
//! - [`snapshot`]: a copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Spawn**: pieces appear horizontally centered on the top row
//! - **Rotation**: clockwise only, rejected if blocked (no wall kicks)
//! - **Lock**: a piece locks as soon as it cannot move down
//! - **Scoring**: 40/100/300/1200 x level for 1-4 lines, +1 per soft drop,
//!   +2 per hard drop
//! - **Levels**: one level per 10 lines; gravity speeds up by 100ms per level
//!   down to 100ms
//! - **Game over**: a new piece that overlaps the stack
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Engine, EngineConfig};
//! use tui_blockfall_types::{GameAction, GameStatus};
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(12345));
//! assert_eq!(engine.status(), GameStatus::Ready);
//!
//! engine.start();
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::Rotate);
//! engine.apply_action(GameAction::HardDrop);
//!
//! assert!(engine.score() >= 2); // hard drop bonus
//! ```
//!
//! # Timing
//!
//! Call [`Engine::tick`] from the host loop with the milliseconds elapsed since
//! the previous call. Gravity moves the piece once the accumulated time exceeds
//! the level's drop interval; variable frame times are fine.

pub mod board;
pub mod config;
pub mod engine;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use engine::{Engine, LockEvent};
pub use piece::Piece;
pub use rng::{PieceQueue, PieceRule};
pub use scoring::{drop_interval_ms, level_for_lines, line_clear_points, ClearOutcome, Session};
pub use shapes::{template, ShapeMatrix, ShapeTemplate};
pub use snapshot::GameSnapshot;
