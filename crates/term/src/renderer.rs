//! Terminal output for finished frames.
//!
//! A frame is compared row by row with the one already on screen. Each row
//! that differs is repainted from its first to its last changed column after
//! a single cursor move, so a falling piece costs a few short writes per tick.
//! With no frame on screen (first draw, resize, [`TerminalRenderer::invalidate`])
//! the screen is cleared and every row is painted.

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors};
use crossterm::terminal::{
    self, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::fb::{FrameBuffer, Glyph, Paint, Rgb};

pub struct TerminalRenderer {
    stdout: Stdout,
    on_screen: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            on_screen: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, Hide, DisableLineWrap)?;
        Ok(())
    }

    /// Undo [`TerminalRenderer::enter`].
    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            ResetColor,
            EnableLineWrap,
            Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        self.on_screen = None;
        Ok(())
    }

    /// Repaint everything on the next frame.
    pub fn invalidate(&mut self) {
        self.on_screen = None;
    }

    /// Put `frame` on screen and return how many rows were repainted.
    ///
    /// `frame` comes back holding the previous frame's storage, ready to be
    /// rendered into again.
    pub fn present(&mut self, frame: &mut FrameBuffer) -> Result<usize> {
        self.bytes.clear();
        let rows = encode_frame(self.on_screen.as_ref(), frame, &mut self.bytes)?;
        if !self.bytes.is_empty() {
            self.stdout.write_all(&self.bytes)?;
            self.stdout.flush()?;
        }

        match self.on_screen.as_mut() {
            Some(shown) => std::mem::swap(shown, frame),
            None => self.on_screen = Some(std::mem::replace(frame, FrameBuffer::new(0, 0))),
        }
        Ok(rows)
    }
}

/// Encode the commands that turn `shown` into `next`. Returns repainted rows.
///
/// `shown` is ignored when its size differs from `next`.
pub fn encode_frame(
    shown: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let shown = shown.filter(|s| s.width() == next.width() && s.height() == next.height());
    if shown.is_none() {
        queue!(out, terminal::Clear(ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut repainted = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match shown {
            Some(shown) => dirty_span(shown.row(y), row),
            None => (!row.is_empty()).then_some((0, row.len())),
        };
        let Some((start, end)) = span else {
            continue;
        };

        queue!(out, MoveTo(start as u16, y))?;
        for &glyph in &row[start..end] {
            pen.draw(out, glyph)?;
        }
        repainted += 1;
    }

    if repainted > 0 {
        queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    }
    Ok(repainted)
}

/// Smallest `start..end` holding every difference between two rows of equal length
fn dirty_span(before: &[Glyph], after: &[Glyph]) -> Option<(usize, usize)> {
    let start = before.iter().zip(after).position(|(a, b)| a != b)?;
    let last = before.iter().zip(after).rposition(|(a, b)| a != b)?;
    Some((start, last + 1))
}

/// Remembers the paint last sent so equal neighbours share one escape sequence.
#[derive(Default)]
struct Pen {
    current: Option<Paint>,
}

impl Pen {
    fn draw(&mut self, out: &mut Vec<u8>, glyph: Glyph) -> io::Result<()> {
        let paint = glyph.paint;
        if self.current != Some(paint) {
            queue!(
                out,
                SetAttribute(Attribute::Reset),
                SetColors(Colors::new(term_color(paint.fg), term_color(paint.bg)))
            )?;
            if paint.bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            if paint.dim {
                queue!(out, SetAttribute(Attribute::Dim))?;
            }
            self.current = Some(paint);
        }
        queue!(out, Print(glyph.ch))
    }
}

fn term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
