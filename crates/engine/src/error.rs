use blockfall_core::GeometryError;
use blockfall_types::PieceKind;
use thiserror::Error;

/// Fatal start-up problems; a controller is never built from a bad config
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board {columns}x{rows} is too small (minimum 4x4)")]
    BoardTooSmall { columns: usize, rows: usize },
    #[error("board {columns}x{rows} is too large")]
    BoardTooLarge { columns: usize, rows: usize },
    #[error("initial tick interval must be greater than zero")]
    ZeroTickInterval,
    #[error("{kind:?} does not fit on the board at the spawn anchor")]
    SpawnOutOfBounds { kind: PieceKind },
    #[error("board is {actual_columns}x{actual_rows} but the config says {columns}x{rows}")]
    BoardMismatch {
        columns: usize,
        rows: usize,
        actual_columns: usize,
        actual_rows: usize,
    },
    #[error("invalid piece geometry: {0}")]
    Geometry(#[from] GeometryError),
}
