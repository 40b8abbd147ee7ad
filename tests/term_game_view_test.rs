use tui_blockfall::core::{template, Engine, EngineConfig, GameSnapshot};
use tui_blockfall::term::{encode_frame, AnchorY, FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{Cell, GameStatus, PieceKind};

fn running_with(kind: PieceKind) -> Engine {
    let mut seed = 1;
    loop {
        let mut engine = Engine::new(EngineConfig::default().with_seed(seed));
        if engine.next() == kind {
            engine.start();
            return engine;
        }
        seed += 1;
    }
}

fn render(snap: &GameSnapshot) -> FrameBuffer {
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    // 10x20 board at 2 columns per cell: 22x22 frame plus the side panel.
    let vp = view.required_viewport(snap.width, snap.height);
    view.render(snap, vp)
}

fn ch(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|g| g.ch).unwrap_or('?')
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::new(EngineConfig::default().with_seed(1)).snapshot();
    let fb = render(&snap);

    assert_eq!(ch(&fb, 0, 0), '┌');
    assert_eq!(ch(&fb, 21, 0), '┐');
    assert_eq!(ch(&fb, 0, 21), '└');
    assert_eq!(ch(&fb, 21, 21), '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = Engine::new(EngineConfig::default().with_seed(1)).snapshot();
    snap.set_cell(0, 19, Cell::Occupied(PieceKind::I));
    let fb = render(&snap);

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    assert_eq!(ch(&fb, 1, 20), '█');
    assert_eq!(ch(&fb, 2, 20), '█');
    assert_eq!(ch(&fb, 3, 20), '·');
}

#[test]
fn term_view_draws_active_piece_and_ghost() {
    let engine = running_with(PieceKind::T);
    let fb = render(&engine.snapshot());

    // T at spawn: (4,0) (3,1) (4,1) (5,1)
    assert_eq!(ch(&fb, 9, 1), '█');
    assert_eq!(ch(&fb, 7, 2), '█');
    assert_eq!(ch(&fb, 11, 2), '█');
    // Ghost rests on the floor: (3,19) (4,19) (5,19) and (4,18)
    assert_eq!(ch(&fb, 7, 20), '░');
    assert_eq!(ch(&fb, 9, 19), '░');
}

#[test]
fn term_view_hides_ghost_when_piece_is_resting() {
    let mut engine = running_with(PieceKind::T);
    while engine.soft_drop() {
        if engine.active().map(|p| p.y) == engine.ghost_y() {
            break;
        }
    }
    let fb = render(&engine.snapshot());
    for y in 0..22 {
        assert!(!fb.row_text(y).contains('░'), "row {}", y);
    }
}

#[test]
fn term_view_side_panel_shows_counters_and_next() {
    let mut snap = Engine::new(EngineConfig::default().with_seed(1)).snapshot();
    snap.score = 1202;
    snap.level = 3;
    snap.lines = 24;
    snap.next = template(PieceKind::O);
    let fb = render(&snap);

    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("1202"));
    assert!(fb.row_text(3).contains("LEVEL"));
    assert_eq!(ch(&fb, 24, 4), '3');
    assert_eq!(ch(&fb, 25, 4), ' ');
    assert!(fb.row_text(6).contains("LINES"));
    assert!(fb.row_text(7).contains("24"));
    assert!(fb.row_text(9).contains("NEXT"));

    // O preview fills the top-left 2x2 of the 4x4 box.
    for (x, y) in [(24, 10), (25, 10), (26, 10), (27, 10), (24, 11), (27, 11)] {
        assert_eq!(ch(&fb, x, y), '█', "({}, {})", x, y);
    }
    assert_eq!(ch(&fb, 28, 10), ' ');
    assert_eq!(ch(&fb, 24, 12), ' ');
}

#[test]
fn term_view_overlays_follow_status() {
    let mut snap = Engine::new(EngineConfig::default().with_seed(1)).snapshot();
    assert_eq!(snap.status, GameStatus::Ready);
    assert!(render(&snap).row_text(11).contains("PRESS ENTER"));

    snap.status = GameStatus::Paused;
    assert!(render(&snap).row_text(11).contains("PAUSED"));

    snap.status = GameStatus::Running;
    let fb = render(&snap);
    assert!(!fb.row_text(11).contains("PAUSED"));
    assert!(!fb.row_text(11).contains("PRESS ENTER"));

    snap.status = GameStatus::GameOver;
    snap.final_score = Some(1202);
    let fb = render(&snap);
    assert!(fb.row_text(11).contains("GAME OVER"));
    assert!(fb.row_text(12).contains("SCORE 1202"));
}

#[test]
fn term_view_handles_custom_board_size() {
    let engine = Engine::new(EngineConfig::default().with_size(6, 8).with_seed(3));
    let fb = render(&engine.snapshot());
    assert_eq!(ch(&fb, 0, 0), '┌');
    assert_eq!(ch(&fb, 13, 0), '┐');
    assert_eq!(ch(&fb, 13, 9), '┘');
}

#[test]
fn moving_piece_produces_small_diff() {
    let mut engine = running_with(PieceKind::O);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = view.required_viewport(10, 20);
    let before = view.render(&engine.snapshot(), vp);
    let same = view.render(&engine.snapshot(), vp);
    engine.move_left();
    let after = view.render(&engine.snapshot(), vp);

    let mut out = Vec::new();
    assert_eq!(encode_frame(Some(&before), &same, &mut out).unwrap(), 0);
    assert!(out.is_empty());

    // Only the piece rows and its ghost rows change; the panel stays put.
    let moved = encode_frame(Some(&before), &after, &mut out).unwrap();
    assert!((1..=4).contains(&moved));

    let full = encode_frame(None, &after, &mut Vec::new()).unwrap();
    assert_eq!(full, after.height() as usize);
}
