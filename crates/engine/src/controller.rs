//! Controller - the game loop state machine
//!
//! The controller owns the board, the falling piece and the next-piece
//! preview, and drives the spawn → fall → lock → clear cycle:
//!
//! ```text
//! Spawning ──legal──▶ Falling ──can't fall / hard drop──▶ Locking
//!    │                  ▲ │                                  │
//!    │ blocked          │ └─ tick / commands (if legal)      ▼
//!    ▼                  │                             ClearingLines
//! GameOver ◀─ spawn region ┴─────────── spawn ◀─────────────┘
//! ```
//!
//! Every change replaces the piece or board as a whole value, and every
//! accepted transition queues exactly one [`GameEvent`]. Illegal moves are
//! not errors: the command returns `false` and nothing changes.

use std::mem;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use blockfall_core::{preview, Board, Grid, Piece, PieceSource, SevenBag};
use blockfall_types::{Command, PieceKind, RotationDirection};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::event::GameEvent;
use crate::snapshot::GameSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting to bring in the next piece
    Spawning,
    /// A piece is falling and accepts commands
    Falling,
    /// The falling piece is being written into the board
    Locking,
    /// Completed rows are being removed
    ClearingLines,
    /// Terminal until reset
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Controller<S = SevenBag> {
    config: GameConfig,
    board: Board<PieceKind>,
    source: S,
    falling: Option<Piece>,
    next: PieceKind,
    phase: Phase,
    paused: bool,
    started: bool,
    level: u32,
    lines: u32,
    score: u32,
    /// Cells any spawning piece may cover; a locked cell here ends the game
    spawn_region: Vec<(usize, usize)>,
    /// Queued transitions, oldest first
    events: Vec<GameEvent>,
}

impl<S: PieceSource> Controller<S> {
    /// Build a controller over an empty board
    pub fn new(config: GameConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::new(config.columns, config.rows);
        Ok(Self::assemble(config, source, board))
    }

    /// Build a controller over a pre-filled board
    ///
    /// `reset` still returns to an empty board.
    pub fn with_board(
        config: GameConfig,
        source: S,
        board: Board<PieceKind>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if board.columns() != config.columns || board.rows() != config.rows {
            return Err(ConfigError::BoardMismatch {
                columns: config.columns,
                rows: config.rows,
                actual_columns: board.columns(),
                actual_rows: board.rows(),
            });
        }
        Ok(Self::assemble(config, source, board))
    }

    fn assemble(config: GameConfig, mut source: S, board: Board<PieceKind>) -> Self {
        let next = source.next_kind();
        Self {
            config,
            board,
            source,
            falling: None,
            next,
            phase: Phase::Spawning,
            paused: false,
            started: false,
            level: (config.level_for_lines)(0),
            lines: 0,
            score: 0,
            spawn_region: config.spawn_region(),
            events: Vec::new(),
        }
    }

    /// Spawn the first piece. Does nothing if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        self.spawn();
        true
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Whether the fall timer should be running
    pub fn is_running(&self) -> bool {
        self.started && !self.paused && self.phase == Phase::Falling
    }

    pub fn falling(&self) -> Option<Piece> {
        self.falling
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// The next piece drawn on a small grid
    pub fn next_preview(&self) -> Grid<PieceKind> {
        preview(self.next)
    }

    pub fn board(&self) -> &Board<PieceKind> {
        &self.board
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Fall interval for the current level
    pub fn tick_interval_ms(&self) -> u32 {
        self.config.tick_interval_ms(self.level)
    }

    /// Hand out every queued event, oldest first
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let grid = self.board.grid();
        GameSnapshot {
            columns: grid.columns(),
            rows: grid.rows(),
            board: (0..grid.rows()).map(|row| grid.row(row).to_vec()).collect(),
            falling: self.falling,
            next: self.next,
            phase: self.phase,
            paused: self.paused,
            level: self.level,
            lines: self.lines,
            score: self.score,
        }
    }

    /// One fall step: move down if possible, otherwise lock
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(piece) = self.falling else {
            return false;
        };

        let candidate = piece.translated(0, 1);
        debug_assert_eq!(
            self.board.is_resting(&piece),
            !self.board.is_legal(&candidate),
            "bottom blocks disagree with full collision for {:?}",
            piece
        );
        if !self.try_replace(candidate) {
            self.lock_falling();
        }
        true
    }

    /// Player-forced fall step
    pub fn soft_drop_tick(&mut self) -> bool {
        self.tick()
    }

    pub fn move_left(&mut self) -> bool {
        self.try_transform(|piece| piece.translated(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_transform(|piece| piece.translated(1, 0))
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_transform(|piece| piece.rotated(RotationDirection::Clockwise))
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_transform(|piece| piece.rotated(RotationDirection::CounterClockwise))
    }

    /// Drop to the landing row and lock immediately
    pub fn hard_drop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(piece) = self.falling else {
            return false;
        };

        let landed = self.board.landing(&piece);
        if landed != piece {
            self.try_replace(landed);
        }
        self.lock_falling();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.paused || !self.started || self.phase == Phase::GameOver {
            return false;
        }
        self.paused = true;
        debug!("paused");
        true
    }

    pub fn resume(&mut self) -> bool {
        if !self.paused {
            return false;
        }
        self.paused = false;
        debug!("resumed");
        true
    }

    /// Back to the construction-time state: empty board, not started
    ///
    /// Events queued before the reset are kept so none is lost.
    pub fn reset(&mut self) -> bool {
        self.board = Board::new(self.config.columns, self.config.rows);
        self.falling = None;
        self.next = self.source.next_kind();
        self.phase = Phase::Spawning;
        self.paused = false;
        self.started = false;
        self.level = (self.config.level_for_lines)(0);
        self.lines = 0;
        self.score = 0;
        info!("game reset");
        true
    }

    /// Apply a command; `false` means it was a no-op
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::RotateCw => self.rotate_cw(),
            Command::RotateCcw => self.rotate_ccw(),
            Command::HardDrop => self.hard_drop(),
            Command::SoftDropTick => self.soft_drop_tick(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => self.reset(),
        }
    }

    fn try_transform(&mut self, transform: impl FnOnce(&Piece) -> Piece) -> bool {
        if !self.is_running() {
            return false;
        }
        match self.falling {
            Some(piece) => self.try_replace(transform(&piece)),
            None => false,
        }
    }

    /// Swap in `candidate` if the board allows it
    fn try_replace(&mut self, candidate: Piece) -> bool {
        let Some(from) = self.falling else {
            return false;
        };
        if !self.board.is_legal(&candidate) {
            return false;
        }
        self.falling = Some(candidate);
        self.events.push(GameEvent::PieceMoved {
            from,
            to: candidate,
        });
        true
    }

    fn enter(&mut self, phase: Phase) {
        trace!(from = ?self.phase, to = ?phase, "phase");
        self.phase = phase;
    }

    fn spawn(&mut self) {
        self.enter(Phase::Spawning);
        let kind = mem::replace(&mut self.next, self.source.next_kind());
        let (column, row) = self.config.spawn_anchor();
        let piece = Piece::new(kind, column, row);

        if !self.board.is_legal(&piece) {
            debug!(?kind, "spawn blocked");
            self.finish();
            return;
        }

        debug!(?kind, next = ?self.next, "piece spawned");
        self.falling = Some(piece);
        self.enter(Phase::Falling);
        self.events.push(GameEvent::PieceSpawned(piece));
    }

    /// Locking → ClearingLines → Spawning | GameOver
    fn lock_falling(&mut self) {
        let Some(piece) = self.falling.take() else {
            return;
        };

        self.enter(Phase::Locking);
        let cells = self.board.lock(&piece, |_| piece.kind);
        debug!(kind = ?piece.kind, column = piece.column, row = piece.row, "piece locked");
        self.events.push(GameEvent::PieceLocked(cells));

        self.enter(Phase::ClearingLines);
        let rows = self.board.completed_rows();
        if !rows.is_empty() {
            self.clear_lines(&rows);
        }

        if self.board.is_full(&self.spawn_region) {
            self.finish();
        } else {
            self.spawn();
        }
    }

    fn clear_lines(&mut self, rows: &[usize]) {
        let collapse = self.board.collapse(rows);
        let cleared = collapse.lines() as u32;
        self.lines = self.lines.saturating_add(cleared);
        self.score = self
            .score
            .saturating_add((self.config.score_for_lines)(cleared, self.level));
        info!(cleared, lines = self.lines, score = self.score, "lines cleared");
        self.events.push(GameEvent::LinesCleared(collapse));

        let level = (self.config.level_for_lines)(self.lines);
        if level != self.level {
            self.level = level;
            info!(level, interval_ms = self.tick_interval_ms(), "level up");
            self.events.push(GameEvent::LevelUp(level));
        }
    }

    fn finish(&mut self) {
        self.falling = None;
        self.enter(Phase::GameOver);
        info!(lines = self.lines, score = self.score, level = self.level, "game over");
        self.events.push(GameEvent::GameOver);
    }
}
