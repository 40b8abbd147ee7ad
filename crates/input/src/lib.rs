//! Terminal input module.
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]. Bindings are
//! fixed:
//!
//! | Keys | Action |
//! |------|--------|
//! | ← h a | move left |
//! | → l d | move right |
//! | ↑ k w | rotate clockwise |
//! | ↓ j s | soft drop |
//! | Space | hard drop |
//! | p | pause / resume |
//! | Enter | start |
//! | r | restart |
//! | q Esc Ctrl-C | quit |

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{action_for, handle_key_event, should_quit};
