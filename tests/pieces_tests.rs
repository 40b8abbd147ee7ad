//! Shape catalog and piece transform tests

use tui_blockfall::core::shapes::{color, spawn_matrix};
use tui_blockfall::core::{template, Piece};
use tui_blockfall::types::{PieceColor, PieceKind, BOARD_WIDTH};

fn cells_of(piece: &Piece) -> Vec<(i16, i16)> {
    piece.cells().into_iter().collect()
}

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        let t = template(kind);
        assert_eq!(t.kind, kind);
        assert_eq!(t.matrix.count(), 4, "{:?}", kind);
        assert_eq!(t.color, color(kind));
    }
}

#[test]
fn test_matrix_sizes() {
    assert_eq!(spawn_matrix(PieceKind::I).size(), 4);
    assert_eq!(spawn_matrix(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(spawn_matrix(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_color_tags() {
    assert_eq!(color(PieceKind::I), PieceColor::Cyan);
    assert_eq!(color(PieceKind::O), PieceColor::Yellow);
    assert_eq!(color(PieceKind::T), PieceColor::Purple);
}

#[test]
fn test_spawn_positions() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, BOARD_WIDTH);
        let expected = match kind {
            PieceKind::I => (3, -1),
            PieceKind::O => (4, 0),
            _ => (3, 0),
        };
        assert_eq!((piece.x, piece.y), expected, "{:?}", kind);
    }
}

#[test]
fn test_i_spawns_on_top_row() {
    let piece = Piece::spawn(PieceKind::I, BOARD_WIDTH);
    assert_eq!(cells_of(&piece), vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
}

#[test]
fn test_o_rotation_is_noop() {
    let mut piece = Piece::spawn(PieceKind::O, BOARD_WIDTH);
    let original = cells_of(&piece);
    for _ in 0..4 {
        piece = piece.rotated_cw();
        assert_eq!(cells_of(&piece), original);
    }
}

#[test]
fn test_i_rotation_cycle_is_four() {
    let start = Piece::spawn(PieceKind::I, BOARD_WIDTH);
    let mut piece = start;
    for step in 1..=4 {
        piece = piece.rotated_cw();
        if step < 4 {
            assert_ne!(piece.matrix, start.matrix, "step {}", step);
        }
    }
    assert_eq!(piece, start);
}

#[test]
fn test_i_turns_vertical_in_column_five() {
    let piece = Piece::spawn(PieceKind::I, BOARD_WIDTH).rotated_cw();
    assert_eq!(cells_of(&piece), vec![(5, -1), (5, 0), (5, 1), (5, 2)]);
}

#[test]
fn test_t_rotates_clockwise() {
    let piece = Piece::spawn(PieceKind::T, BOARD_WIDTH).rotated_cw();
    // Stem now points right.
    assert_eq!(cells_of(&piece), vec![(4, 0), (4, 1), (5, 1), (4, 2)]);
}

#[test]
fn test_translate_keeps_shape() {
    let piece = Piece::spawn(PieceKind::S, BOARD_WIDTH);
    let moved = piece.translated(2, 5);
    assert_eq!(moved.matrix, piece.matrix);
    assert_eq!((moved.x, moved.y), (5, 5));
    let shifted: Vec<_> = cells_of(&piece)
        .into_iter()
        .map(|(x, y)| (x + 2, y + 5))
        .collect();
    assert_eq!(cells_of(&moved), shifted);
}
