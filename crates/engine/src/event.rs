use blockfall_core::{Collapse, Piece};
use blockfall_types::{PieceKind, BLOCKS_PER_PIECE};

/// A locked block: `(column, row, kind)`
pub type LockedCell = (usize, usize, PieceKind);

/// Transitions reported to rendering/audio collaborators
///
/// Events are queued in the order the transitions happen and handed out once
/// by [`Controller::take_events`](crate::Controller::take_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new piece entered the board at the spawn anchor
    PieceSpawned(Piece),
    /// The falling piece was replaced by a moved or rotated one
    PieceMoved { from: Piece, to: Piece },
    /// The falling piece came to rest and became part of the board
    PieceLocked([LockedCell; BLOCKS_PER_PIECE]),
    /// Completed rows were removed; cells above them fell
    LinesCleared(Collapse),
    /// The level changed after a clear
    LevelUp(u32),
    GameOver,
}
