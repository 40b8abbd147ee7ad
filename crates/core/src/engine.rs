//! Engine module - owns and sequences the whole game
//!
//! The engine ties together the board, the falling piece, the piece queue and
//! the session counters. Hosts drive it with [`Engine::tick`] from their own
//! loop and forward player commands as they arrive. Every call runs to
//! completion; the caller is responsible for serializing access.
//!
//! Commands that cannot apply (blocked moves, commands while not running)
//! leave the state untouched and return `false`.

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::Piece;
use crate::rng::PieceQueue;
use crate::scoring::Session;
use crate::shapes::{template, ShapeTemplate};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GameStatus, PieceKind, HARD_DROP_POINTS, SOFT_DROP_POINTS};

/// What happened when a piece locked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Line clear points only, drop bonuses excluded
    pub points: u32,
    pub level_up: bool,
    /// The following spawn was blocked
    pub game_over: bool,
}

/// Outcome of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Moved,
    Locked,
}

#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    queue: PieceQueue,
    session: Session,
    status: GameStatus,
    drop_timer_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create an engine in the `Ready` state.
    ///
    /// The config is used as given; see [`Engine::try_new`] for validation.
    pub fn new(config: EngineConfig) -> Self {
        let mut queue = match config.seed {
            Some(seed) => PieceQueue::new(config.piece_rule, seed),
            None => PieceQueue::from_entropy(config.piece_rule),
        };
        let next = queue.draw();

        Self {
            board: Board::new(config.width, config.height),
            active: None,
            next,
            queue,
            session: Session::new(),
            status: GameStatus::Ready,
            drop_timer_ms: 0,
            last_event: None,
        }
    }

    /// Validate the config, then create the engine
    pub fn try_new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scenario setup (puzzles, tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    /// Catalog entry of the next piece (shape and color for previews)
    pub fn next_template(&self) -> ShapeTemplate {
        template(self.next)
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn lines(&self) -> u32 {
        self.session.lines()
    }

    pub fn level(&self) -> u32 {
        self.session.level()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.session.drop_interval_ms()
    }

    /// Time accumulated toward the next gravity step
    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    /// Score at the moment the game ended
    pub fn final_score(&self) -> Option<u32> {
        self.is_game_over().then(|| self.session.score())
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start a game from `Ready`, or a new one after `GameOver`.
    ///
    /// Does nothing while a game is running or paused.
    pub fn start(&mut self) -> bool {
        match self.status {
            GameStatus::Ready | GameStatus::GameOver => {
                self.reset();
                true
            }
            GameStatus::Running | GameStatus::Paused => false,
        }
    }

    /// Clear everything and begin a fresh game in `Running`.
    pub fn reset(&mut self) {
        self.board.clear();
        self.session = Session::new();
        self.drop_timer_ms = 0;
        self.last_event = None;
        self.active = None;
        self.status = GameStatus::Running;
        self.spawn_piece();
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// A spawn that overlaps the board ends the game; the blocked piece stays
    /// visible as the active piece.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::spawn(self.next, self.board.width());
        self.next = self.queue.draw();
        self.active = Some(piece);

        if self.board.collides(&piece) {
            self.status = GameStatus::GameOver;
            return false;
        }
        true
    }

    /// Advance gravity by `elapsed_ms`.
    ///
    /// Once the accumulated time exceeds the drop interval the piece moves down
    /// one row (or locks) and the accumulator restarts. Returns whether a step ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.status.is_playable() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms <= self.session.drop_interval_ms() {
            return false;
        }

        self.drop_timer_ms = 0;
        self.step_down().is_some()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Rotate clockwise in place. No wall kicks.
    pub fn rotate(&mut self) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_commit(active.rotated_cw())
    }

    /// Move down one row or lock. Scores a point either way.
    pub fn soft_drop(&mut self) -> bool {
        if !self.status.is_playable() || self.step_down().is_none() {
            return false;
        }
        self.session.add_points(SOFT_DROP_POINTS);
        true
    }

    /// Drop until the piece locks, plus a flat bonus.
    pub fn hard_drop(&mut self) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        loop {
            match self.step_down() {
                Some(Step::Moved) => continue,
                Some(Step::Locked) => break,
                None => return false,
            }
        }
        self.session.add_points(HARD_DROP_POINTS);
        true
    }

    /// Toggle between `Running` and `Paused`
    pub fn toggle_pause(&mut self) -> bool {
        match self.status {
            GameStatus::Running => {
                self.status = GameStatus::Paused;
                true
            }
            GameStatus::Paused => {
                self.status = GameStatus::Running;
                true
            }
            GameStatus::Ready | GameStatus::GameOver => false,
        }
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::Rotate => self.rotate(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Landing position of the active piece if it were hard-dropped now
    pub fn ghost(&self) -> Option<Piece> {
        let mut ghost = self.active?;
        loop {
            let lower = ghost.translated(0, 1);
            if self.board.collides(&lower) {
                return Some(ghost);
            }
            ghost = lower;
        }
    }

    /// Row the active piece would land on
    pub fn ghost_y(&self) -> Option<i16> {
        self.ghost().map(|piece| piece.y)
    }

    fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        if !self.status.is_playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_commit(active.translated(dx, dy))
    }

    /// Replace the active piece with `candidate` if it fits
    fn try_commit(&mut self, candidate: Piece) -> bool {
        if self.board.collides(&candidate) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Move the active piece down one row, locking it when blocked
    fn step_down(&mut self) -> Option<Step> {
        let active = self.active?;
        if self.try_commit(active.translated(0, 1)) {
            return Some(Step::Moved);
        }
        self.lock_piece(active);
        Some(Step::Locked)
    }

    /// Merge the piece, clear rows, score and spawn the next piece
    fn lock_piece(&mut self, piece: Piece) {
        self.board.merge(&piece);
        self.active = None;

        let cleared = self.board.clear_full_rows();
        let outcome = self.session.record_clear(cleared);
        let spawned = self.spawn_piece();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: outcome.lines,
            points: outcome.points,
            level_up: outcome.level_up,
            game_over: !spawned,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.board.width();
        out.height = self.board.height();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = self.active;
        out.ghost = self.ghost();
        out.next = self.next_template();
        out.status = self.status;
        out.score = self.session.score();
        out.lines = self.session.lines();
        out.level = self.session.level();
        out.drop_interval_ms = self.session.drop_interval_ms();
        out.final_score = self.final_score();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
