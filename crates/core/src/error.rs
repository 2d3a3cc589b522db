use blockfall_types::{Orientation, PieceKind};
use thiserror::Error;

/// Problems found while checking the piece geometry table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{kind:?} at {orientation:?} repeats offset {offset:?}")]
    DuplicateOffset {
        kind: PieceKind,
        orientation: Orientation,
        offset: (i16, i16),
    },
    #[error("{kind:?} at {orientation:?} has an empty, unordered or out-of-range bottom block list")]
    MalformedBottomBlocks {
        kind: PieceKind,
        orientation: Orientation,
    },
    #[error("{kind:?} at {orientation:?} bottom blocks do not match its shape")]
    BottomBlocksMismatch {
        kind: PieceKind,
        orientation: Orientation,
    },
}
