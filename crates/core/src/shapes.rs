//! Shapes module - the seven piece templates
//!
//! Each kind is a square occupancy matrix (side 2, 3 or 4) plus a color tag.
//! Row 0 of a matrix is its top row, matching board coordinates.
//!
//! ```text
//! I  . . . .    J  # . .    L  . . #    O  # #
//!    # # # #       # # #       # # #       # #
//!    . . . .       . . .       . . .
//!    . . . .
//!
//! S  . # #      T  . # .    Z  # # .
//!    # # .         # # #       . # #
//!    . . .         . . .       . . .
//! ```

use crate::types::{PieceColor, PieceKind};

/// Largest matrix side in the catalog
pub const MAX_SHAPE_SIDE: usize = 4;

/// Square occupancy matrix, stored in the top-left corner of a 4x4 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 values. Entries outside `size` are ignored.
    pub const fn new(size: u8, rows: [[u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE]) -> Self {
        Self { size, rows }
    }

    /// Side length of the square
    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the cell at (col, row) is part of the piece
    #[inline]
    pub fn is_filled(&self, col: u8, row: u8) -> bool {
        col < self.size && row < self.size && self.rows[row as usize][col as usize] != 0
    }

    /// Occupied (col, row) pairs in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        let n = self.size;
        (0..n).flat_map(move |row| {
            (0..n).filter_map(move |col| self.is_filled(col, row).then_some((col, row)))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.occupied().count()
    }

    /// 90° clockwise rotation: `rotated[x][n-1-y] = original[y][x]`.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [[0u8; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for y in 0..n {
            for x in 0..n {
                rows[x][n - 1 - y] = self.rows[y][x];
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }
}

/// Immutable catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeTemplate {
    pub kind: PieceKind,
    pub matrix: ShapeMatrix,
    pub color: PieceColor,
}

const I_MATRIX: ShapeMatrix =
    ShapeMatrix::new(4, [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]);
const J_MATRIX: ShapeMatrix =
    ShapeMatrix::new(3, [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const L_MATRIX: ShapeMatrix =
    ShapeMatrix::new(3, [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const O_MATRIX: ShapeMatrix =
    ShapeMatrix::new(2, [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const S_MATRIX: ShapeMatrix =
    ShapeMatrix::new(3, [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const T_MATRIX: ShapeMatrix =
    ShapeMatrix::new(3, [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
const Z_MATRIX: ShapeMatrix =
    ShapeMatrix::new(3, [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);

/// Get the template for a piece kind
pub fn template(kind: PieceKind) -> ShapeTemplate {
    ShapeTemplate {
        kind,
        matrix: spawn_matrix(kind),
        color: color(kind),
    }
}

/// Spawn orientation matrix for a piece kind
pub fn spawn_matrix(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => I_MATRIX,
        PieceKind::J => J_MATRIX,
        PieceKind::L => L_MATRIX,
        PieceKind::O => O_MATRIX,
        PieceKind::S => S_MATRIX,
        PieceKind::T => T_MATRIX,
        PieceKind::Z => Z_MATRIX,
    }
}

/// Color tag for a piece kind
pub fn color(kind: PieceKind) -> PieceColor {
    match kind {
        PieceKind::I => PieceColor::Cyan,
        PieceKind::J => PieceColor::Blue,
        PieceKind::L => PieceColor::Orange,
        PieceKind::O => PieceColor::Yellow,
        PieceKind::S => PieceColor::Green,
        PieceKind::T => PieceColor::Purple,
        PieceKind::Z => PieceColor::Red,
    }
}
