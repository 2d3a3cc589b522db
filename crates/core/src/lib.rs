//! Core rules - grid, piece geometry, pieces, board and piece sources
//!
//! Everything in this crate is pure and deterministic: no timers, no I/O and no
//! rendering handles. The engine crate builds the game loop on top of it.
//!
//! # Module Structure
//!
//! - [`grid`]: generic fixed-size 2D storage
//! - [`geometry`]: per-kind block offsets and bottom blocks for each orientation
//! - [`piece`]: pieces as values with derived cells
//! - [`board`]: collision, locking, completed rows and collapse
//! - [`rng`]: sources of upcoming piece kinds
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, Piece};
//! use blockfall_types::{PieceKind, RotationDirection};
//!
//! let mut board: Board<PieceKind> = Board::new(10, 20);
//! let piece = Piece::new(PieceKind::T, 4, 0);
//!
//! // Geometry and legality are separate: try a candidate, keep it if it fits.
//! let candidate = piece.rotated(RotationDirection::Clockwise);
//! assert!(board.is_legal(&candidate));
//!
//! let landed = board.landing(&candidate);
//! board.lock(&landed, |_| PieceKind::T);
//! assert!(board.completed_rows().is_empty());
//! ```

pub mod board;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

pub use board::{Board, Collapse};
pub use error::GeometryError;
pub use grid::Grid;
pub use piece::{preview, CellPos, Piece};
pub use rng::{PieceSource, Sequence, SevenBag, SimpleRng, Uniform};
