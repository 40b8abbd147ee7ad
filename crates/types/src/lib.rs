//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! terminal view and the input mapping can all agree on one vocabulary.
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Row 0 is the top row and
//! `y` grows downward. Pieces may hang above row 0 while falling.
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop cadence (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 100 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity interval |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Cell, GameAction, GameStatus, PieceKind, BOARD_WIDTH};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let cell = Cell::Occupied(kind);
//! assert!(cell.is_occupied());
//! assert_eq!(cell.kind(), Some(PieceKind::T));
//!
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert!(GameStatus::Running.is_playable());
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Default board width in cells
pub const BOARD_WIDTH: u16 = 10;

/// Default board height in cells
pub const BOARD_HEIGHT: u16 = 20;

/// Smallest accepted board side (the I piece needs four columns)
pub const MIN_BOARD_SIDE: u16 = 4;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u16 = 64;

/// Host loop cadence in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 100;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level at the start of every session
pub const START_LEVEL: u32 = 1;

/// Line clear base points indexed by lines cleared in one lock (Classic rules)
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points for each player-invoked soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Flat bonus for a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// Falling piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::J => 1,
            PieceKind::L => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::T => 5,
            PieceKind::Z => 6,
        }
    }
}

/// Color tag attached to each piece kind. Only the presentation layer cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

/// Board cell state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Locked by a piece of this kind
    Occupied(PieceKind),
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    pub fn kind(&self) -> Option<PieceKind> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(kind) => Some(*kind),
        }
    }
}

/// Engine lifecycle.
///
/// `Ready` until the first start, `Running` and `Paused` toggle, `GameOver`
/// is terminal until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Ready,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Whether player commands and ticks are accepted
    pub fn is_playable(&self) -> bool {
        matches!(self, GameStatus::Running)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Ready => "ready",
            GameStatus::Running => "running",
            GameStatus::Paused => "paused",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
    HardDrop,
    Pause,
    Start,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotate" => Some(GameAction::Rotate),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}
