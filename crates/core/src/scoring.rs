//! Scoring module - line clear points, levels and gravity
//!
//! Classic rules: a lock that clears 1..=4 lines scores
//! `{40, 100, 300, 1200} x level`. The level is `lines / 10 + 1` and the
//! gravity interval shrinks by 100ms per level down to a 100ms floor.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, LINES_PER_LEVEL, LINE_SCORES, START_LEVEL,
};

/// Points for clearing `lines` rows in one lock at `level` (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level reached after clearing `total_lines`
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + START_LEVEL
}

/// Gravity interval in milliseconds for a level
pub fn drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(START_LEVEL).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Result of recording one lock's line clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClearOutcome {
    pub lines: u32,
    pub points: u32,
    pub level_up: bool,
}

/// Score, lines, level and the derived gravity interval for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    score: u32,
    lines: u32,
    level: u32,
    drop_interval_ms: u32,
}

impl Session {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            drop_interval_ms: drop_interval_ms(START_LEVEL),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Add drop bonus points
    pub fn add_points(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Apply the lines cleared by one lock.
    ///
    /// Points use the level in effect before this clear. The gravity
    /// interval is only recomputed when the level goes up.
    pub fn record_clear(&mut self, lines: usize) -> ClearOutcome {
        if lines == 0 {
            return ClearOutcome::default();
        }

        let points = line_clear_points(lines, self.level);
        self.add_points(points);
        self.lines = self.lines.saturating_add(lines as u32);

        let new_level = level_for_lines(self.lines);
        let level_up = new_level > self.level;
        if level_up {
            self.level = new_level;
            self.drop_interval_ms = drop_interval_ms(new_level);
        }

        ClearOutcome {
            lines: lines as u32,
            points,
            level_up,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(line_clear_points(0, 1), 0);
        assert_eq!(line_clear_points(1, 1), 40);
        assert_eq!(line_clear_points(2, 1), 100);
        assert_eq!(line_clear_points(3, 1), 300);
        assert_eq!(line_clear_points(4, 1), 1200);

        assert_eq!(line_clear_points(1, 5), 40 * 5);
        assert_eq!(line_clear_points(4, 3), 1200 * 3);
        assert_eq!(line_clear_points(5, 1), 0);
    }

    #[test]
    fn test_level_calculation() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(29), 3);
        assert_eq!(level_for_lines(100), 11);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(1), 1000);
        assert_eq!(drop_interval_ms(2), 900);
        assert_eq!(drop_interval_ms(9), 200);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(11), 100);
        assert_eq!(drop_interval_ms(50), 100);
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();
        assert_eq!(session.score(), 0);
        assert_eq!(session.lines(), 0);
        assert_eq!(session.level(), 1);
        assert_eq!(session.drop_interval_ms(), 1000);
    }

    #[test]
    fn test_record_zero_lines_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.record_clear(0), ClearOutcome::default());
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_tetris_at_level_one() {
        let mut session = Session::new();
        let outcome = session.record_clear(4);
        assert_eq!(outcome.points, 1200);
        assert!(!outcome.level_up);
        assert_eq!(session.score(), 1200);
        assert_eq!(session.lines(), 4);
    }

    #[test]
    fn test_level_up_after_ten_lines() {
        let mut session = Session::new();
        session.record_clear(4);
        session.record_clear(4);
        let outcome = session.record_clear(2);

        assert!(outcome.level_up);
        // The clear that crosses the threshold still scores at level 1.
        assert_eq!(outcome.points, 100);
        assert_eq!(session.level(), 2);
        assert_eq!(session.drop_interval_ms(), 900);
    }

    #[test]
    fn test_hundred_lines_hits_interval_floor() {
        let mut session = Session::new();
        for _ in 0..25 {
            session.record_clear(4);
        }
        assert_eq!(session.lines(), 100);
        assert_eq!(session.level(), 11);
        assert_eq!(session.drop_interval_ms(), 100);
    }

    #[test]
    fn test_score_saturates() {
        let mut session = Session::new();
        session.add_points(u32::MAX - 1);
        session.add_points(10);
        assert_eq!(session.score(), u32::MAX);
    }
}
