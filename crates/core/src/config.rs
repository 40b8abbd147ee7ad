//! Engine configuration

use std::fmt;

use crate::rng::PieceRule;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_SIDE, MIN_BOARD_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    /// Fixed seed for the piece queue. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    pub piece_rule: PieceRule,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: None,
            piece_rule: PieceRule::Uniform,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_piece_rule(mut self, piece_rule: PieceRule) -> Self {
        self.piece_rule = piece_rule;
        self
    }

    /// Check board dimensions are within the supported range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = MIN_BOARD_SIDE..=MAX_BOARD_SIDE;
        if !range.contains(&self.width) {
            return Err(ConfigError::Width(self.width));
        }
        if !range.contains(&self.height) {
            return Err(ConfigError::Height(self.height));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    Width(u16),
    Height(u16),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Width(w) => write!(
                f,
                "board width {} is outside {}..={}",
                w, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
            ConfigError::Height(h) => write!(
                f,
                "board height {} is outside {}..={}",
                h, MIN_BOARD_SIDE, MAX_BOARD_SIDE
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
