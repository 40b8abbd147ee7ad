//! Board module - manages the game grid
//!
//! The board is a W x H grid of [`Cell`]s stored as one flat row-major vector.
//! Coordinates: (x, y) with x growing rightward from column 0 and y growing
//! downward from row 0 at the top. Dimensions are fixed at creation.
//!
//! Rows above the top (y < 0) are not stored. They are never reported as
//! blocked so that a piece can hang partially above the visible field.

use crate::piece::Piece;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Get cell at position (x, y), None if outside the stored grid
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Returns false if outside the stored grid.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether a piece cell at (x, y) would be blocked.
    ///
    /// Left, right and bottom edges block. Anything with y < 0 is open sky.
    pub fn is_occupied_or_out_of_bounds(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.get(x, y).is_some_and(|cell| cell.is_occupied())
    }

    /// Whether any cell of the piece is blocked
    pub fn collides(&self, piece: &Piece) -> bool {
        piece
            .cells()
            .iter()
            .any(|&(x, y)| self.is_occupied_or_out_of_bounds(x, y))
    }

    /// Check if a row is completely filled. A zero-width board has no full rows.
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| !row.is_empty() && row.iter().all(|cell| cell.is_occupied()))
    }

    /// Cells of one row, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        let start = y * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Write the piece into the grid as `Occupied(kind)`.
    ///
    /// Cells above the top row are dropped.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Cell::Occupied(piece.kind));
            }
        }
    }

    /// Remove every full row and compact the rows above it.
    ///
    /// Scans from the bottom. After a clear the same index is examined again,
    /// since the row that was above has just moved into it.
    /// Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        if width == 0 {
            return 0;
        }
        let mut cleared = 0;
        let mut y = self.height as usize;

        while y > 0 {
            let row = y - 1;
            if !self.is_row_full(row) {
                y -= 1;
                continue;
            }

            // Shift everything above `row` down by one
            for dst in (1..=row).rev() {
                let src_start = (dst - 1) * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst * width);
            }
            self.cells[..width].fill(Cell::Empty);
            cleared += 1;
        }

        cleared
    }

    /// Get a reference to the internal cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Fill a whole row with one kind (test and bench setup)
    pub fn fill_row(&mut self, y: i16, kind: PieceKind) {
        for x in 0..self.width as i16 {
            self.set(x, y, Cell::Occupied(kind));
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_zero_width_board_has_nothing_to_clear() {
        let mut board = Board::new(0, 5);
        assert!(!board.is_row_full(0));
        assert_eq!(board.rows().count(), 0);
        assert_eq!(board.clear_full_rows(), 0);
        assert_eq!(board.height(), 5);
    }

    #[test]
    fn test_sky_is_open_but_walls_are_not() {
        let board = Board::default();
        assert!(!board.is_occupied_or_out_of_bounds(0, -3));
        assert!(board.is_occupied_or_out_of_bounds(-1, -3));
        assert!(board.is_occupied_or_out_of_bounds(10, -1));
        assert!(board.is_occupied_or_out_of_bounds(0, 20));
    }

    #[test]
    fn test_clear_single_bottom_row_shifts_content() {
        let mut board = Board::default();
        board.fill_row(19, PieceKind::I);
        board.set(4, 18, Cell::Occupied(PieceKind::T));

        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.get(4, 19), Some(Cell::Occupied(PieceKind::T)));
        assert_eq!(board.get(4, 18), Some(Cell::Empty));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::default();
        board.fill_row(19, PieceKind::I);
        board.set(0, 18, Cell::Occupied(PieceKind::S));
        board.fill_row(17, PieceKind::J);
        board.set(1, 16, Cell::Occupied(PieceKind::Z));

        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(0, 19), Some(Cell::Occupied(PieceKind::S)));
        assert_eq!(board.get(1, 18), Some(Cell::Occupied(PieceKind::Z)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_merge_drops_cells_above_top() {
        let mut board = Board::default();
        // Vertical I hanging two rows above the top
        let piece = Piece::spawn(PieceKind::I, 10).rotated_cw().translated(0, -1);
        board.merge(&piece);
        // Rows -2..=1 were covered; only rows 0 and 1 are stored.
        assert_eq!(board.occupied_count(), 2);
        assert_eq!(board.get(5, 0), Some(Cell::Occupied(PieceKind::I)));
        assert_eq!(board.get(5, 1), Some(Cell::Occupied(PieceKind::I)));
    }

    #[test]
    fn test_rows_iterates_top_down() {
        let mut board = Board::new(4, 5);
        board.set(2, 4, Cell::Occupied(PieceKind::L));
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4][2], Cell::Occupied(PieceKind::L));
    }
}
