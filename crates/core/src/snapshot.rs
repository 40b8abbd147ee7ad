//! Snapshot module - everything a renderer needs, copied out of the engine
//!
//! Views render from a [`GameSnapshot`] rather than borrowing the engine, so
//! drawing stays a pure function. `snapshot_into` reuses the board buffer.

use crate::piece::Piece;
use crate::shapes::{template, ShapeTemplate};
use crate::types::{Cell, GameStatus, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cells, `width * height` long
    pub board: Vec<Cell>,
    pub active: Option<Piece>,
    pub ghost: Option<Piece>,
    pub next: ShapeTemplate,
    pub status: GameStatus,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub final_score: Option<u32>,
}

impl GameSnapshot {
    /// Cell at (x, y), None outside the grid
    pub fn cell(&self, x: u16, y: u16) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.board
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn set_cell(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = y as usize * self.width as usize + x as usize;
            self.board[idx] = cell;
        }
    }

    /// Ghost worth drawing: strictly below the active piece
    pub fn visible_ghost(&self) -> Option<Piece> {
        match (self.active, self.ghost) {
            (Some(active), Some(ghost)) if ghost.y > active.y => Some(ghost),
            _ => None,
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active: None,
            ghost: None,
            next: template(PieceKind::I),
            status: GameStatus::Ready,
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: 0,
            final_score: None,
        }
    }
}
