//! Terminal front end for the game.
//!
//! Rendering goes through a plain framebuffer instead of a widget toolkit:
//! [`GameView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure, no
//! I/O) and [`TerminalRenderer`] flushes it to the terminal, repainting only the
//! changed span of each changed row.
//!
//! Board cells are drawn 2 columns wide by default so they look square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Paint, Rgb};
pub use game_view::{piece_rgb, AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
