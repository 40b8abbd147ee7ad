//! RNG module - next-piece selection
//!
//! The default rule draws each kind uniformly and independently, so repeats
//! are allowed. `Bag7` is the opt-in alternative: every group of seven draws
//! holds each kind exactly once.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// How the next piece is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceRule {
    #[default]
    Uniform,
    Bag7,
}

impl PieceRule {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "random" => Some(PieceRule::Uniform),
            "bag7" | "7bag" | "bag" => Some(PieceRule::Bag7),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceRule::Uniform => "uniform",
            PieceRule::Bag7 => "bag7",
        }
    }
}

/// Seeded piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    rule: PieceRule,
    seed: u64,
    rng: StdRng,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl PieceQueue {
    /// Create a queue with the given rule and seed
    pub fn new(rule: PieceRule, seed: u64) -> Self {
        Self {
            rule,
            seed,
            rng: StdRng::seed_from_u64(seed),
            bag: PieceKind::ALL,
            // force a refill on the first bag draw
            bag_index: PieceKind::ALL.len(),
        }
    }

    /// Create a queue seeded from OS entropy
    pub fn from_entropy(rule: PieceRule) -> Self {
        Self::new(rule, rand::random())
    }

    pub fn rule(&self) -> PieceRule {
        self.rule
    }

    /// Seed this queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match self.rule {
            PieceRule::Uniform => PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())],
            PieceRule::Bag7 => {
                if self.bag_index >= self.bag.len() {
                    self.refill_bag();
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }

    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }
}
