//! Piece module - the live falling piece
//!
//! A [`Piece`] is a plain value: kind, its current (possibly rotated) matrix
//! and the board position of the matrix's top-left corner. Transforms return
//! new values and know nothing about the board; the engine validates a
//! candidate and then either commits or drops it.

use arrayvec::ArrayVec;

use crate::shapes::{spawn_matrix, ShapeMatrix, MAX_SHAPE_SIDE};
use crate::types::PieceKind;

/// Absolute cells of a piece, at most one per matrix entry
pub type PieceCells = ArrayVec<(i16, i16), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    /// Create a piece in spawn position for a board `board_width` columns wide.
    ///
    /// Horizontal: `floor(W/2) - ceil(side/2)`. Vertical: row 0, except the I
    /// piece which starts at -1 so its filled row lands on the top row.
    pub fn spawn(kind: PieceKind, board_width: u16) -> Self {
        let matrix = spawn_matrix(kind);
        let side = matrix.size() as i16;
        let x = (board_width / 2) as i16 - (side + 1) / 2;
        let y = if kind == PieceKind::I { -1 } else { 0 };
        Self { kind, matrix, x, y }
    }

    /// Same piece with its matrix turned 90° clockwise
    pub fn rotated_cw(&self) -> Self {
        Self {
            matrix: self.matrix.rotated_cw(),
            ..*self
        }
    }

    /// Same piece shifted by (dx, dy)
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Board coordinates of every occupied cell
    pub fn cells(&self) -> PieceCells {
        self.matrix
            .occupied()
            .map(|(col, row)| (self.x + col as i16, self.y + row as i16))
            .collect()
    }
}
