use serde::{Deserialize, Serialize};

use blockfall_core::Piece;
use blockfall_types::PieceKind;

use crate::controller::Phase;

/// Everything a renderer needs to draw one frame
///
/// Holds the locked grid and the falling piece plus counters, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub columns: usize,
    pub rows: usize,
    /// Locked cells, top row first
    pub board: Vec<Vec<Option<PieceKind>>>,
    pub falling: Option<Piece>,
    pub next: PieceKind,
    pub phase: Phase,
    pub paused: bool,
    pub level: u32,
    pub lines: u32,
    pub score: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase != Phase::GameOver && !self.paused
    }

    /// Locked cell or falling-piece cell at a position
    pub fn cell_at(&self, column: usize, row: usize) -> Option<PieceKind> {
        let covering = self.falling.filter(|piece| {
            piece
                .cells()
                .iter()
                .any(|&(c, r)| c >= 0 && r >= 0 && (c as usize, r as usize) == (column, row))
        });
        covering
            .map(|piece| piece.kind)
            .or_else(|| self.board.get(row)?.get(column).copied().flatten())
    }
}
