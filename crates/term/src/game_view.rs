//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::shapes::color;
use crate::core::{GameSnapshot, Piece, ShapeMatrix};
use crate::fb::{FrameBuffer, Glyph, Paint, Rgb};
use crate::types::{GameStatus, PieceColor};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Side panel width in terminal columns, including the gap after the frame
const PANEL_W: u16 = 14;

/// Preview box side in cells
const PREVIEW_SIDE: u16 = 4;

pub struct GameView {
    /// Terminal columns per board cell
    cell_w: u16,
    /// Terminal rows per board cell
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 makes cells roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the well frame landed in the viewport
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Smallest viewport that shows the well and the side panel in full.
    pub fn required_viewport(&self, board_width: u16, board_height: u16) -> Viewport {
        let w = board_width.saturating_mul(self.cell_w).saturating_add(2);
        let h = board_height.saturating_mul(self.cell_h).saturating_add(2);
        Viewport::new(w.saturating_add(PANEL_W), h)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame_w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let total_w = frame_w.saturating_add(PANEL_W);
        let frame = Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame_w - 2,
            frame_h - 2,
            Paint::new(WELL_BG, WELL_BG).glyph(' '),
        );
        draw_border(fb, frame, Paint::new(Rgb::new(200, 200, 200), PANEL_BG));

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y).and_then(|c| c.kind()) {
                    Some(kind) => {
                        let paint = piece_paint(color(kind)).bold();
                        self.fill_cell(fb, frame, x, y, paint.glyph('█'));
                    }
                    None => {
                        let dot = Paint::new(Rgb::new(90, 90, 100), WELL_BG).dim();
                        self.fill_cell(fb, frame, x, y, dot.glyph('·'));
                    }
                }
            }
        }

        if let Some(ghost) = snap.visible_ghost() {
            let paint = Paint::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            self.draw_piece(fb, frame, snap, &ghost, paint.glyph('░'));
        }
        if let Some(active) = snap.active {
            let paint = piece_paint(color(active.kind)).bold();
            self.draw_piece(fb, frame, snap, &active, paint.glyph('█'));
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.status {
            GameStatus::Ready => draw_overlay(fb, frame, &["PRESS ENTER"]),
            GameStatus::Paused => draw_overlay(fb, frame, &["PAUSED"]),
            GameStatus::GameOver => {
                draw_overlay(fb, frame, &["GAME OVER"]);
                let score = snap.final_score.unwrap_or(snap.score);
                let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(1);
                let digits = digit_count(score);
                let label_w = 6 + digits;
                let x = frame.x + frame.w.saturating_sub(label_w) / 2;
                let paint = overlay_paint();
                fb.put_str(x, mid_y, "SCORE ", paint);
                fb.put_number(x + 6, mid_y, score, paint);
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Cells above the top row are clipped.
    fn draw_piece(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        snap: &GameSnapshot,
        piece: &Piece,
        glyph: Glyph,
    ) {
        for (x, y) in piece.cells() {
            if x >= 0 && y >= 0 && (x as u16) < snap.width && (y as u16) < snap.height {
                self.fill_cell(fb, frame, x as u16, y as u16, glyph);
            }
        }
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: u16, y: u16, glyph: Glyph) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }

        let label = Paint::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = Paint::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_number(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, &snap.next.matrix, snap.next.color);
    }

    /// Next piece in its spawn orientation inside a fixed 4x4 box.
    fn draw_preview(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        matrix: &ShapeMatrix,
        color: PieceColor,
    ) {
        let empty = Paint::new(WELL_BG, PANEL_BG).glyph(' ');
        fb.fill_rect(x, y, PREVIEW_SIDE * self.cell_w, PREVIEW_SIDE, empty);
        let filled = piece_paint(color).bold().glyph('█');
        for (col, row) in matrix.occupied() {
            let px = x + col as u16 * self.cell_w;
            fb.fill_rect(px, y + row as u16, self.cell_w, 1, filled);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, paint: Paint) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

    fb.set(x, y, paint.glyph('┌'));
    fb.set(x + w - 1, y, paint.glyph('┐'));
    fb.set(x, y + h - 1, paint.glyph('└'));
    fb.set(x + w - 1, y + h - 1, paint.glyph('┘'));

    for dx in 1..w - 1 {
        fb.set(x + dx, y, paint.glyph('─'));
        fb.set(x + dx, y + h - 1, paint.glyph('─'));
    }
    for dy in 1..h - 1 {
        fb.set(x, y + dy, paint.glyph('│'));
        fb.set(x + w - 1, y + dy, paint.glyph('│'));
    }
}

fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y.saturating_add(i as u16), text, overlay_paint());
    }
}

fn overlay_paint() -> Paint {
    Paint::new(Rgb::new(255, 255, 255), PANEL_BG).bold()
}

fn digit_count(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Terminal color for a piece color tag.
pub fn piece_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Red => Rgb::new(220, 80, 80),
    }
}

fn piece_paint(color: PieceColor) -> Paint {
    Paint::new(piece_rgb(color), WELL_BG)
}
