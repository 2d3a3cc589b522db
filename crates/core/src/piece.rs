//! Piece module - an instantiated piece as a value
//!
//! A piece is `{kind, orientation, anchor}`; its cells are always derived from
//! the geometry table, never stored. Moves and rotations return new pieces and
//! never check legality, so callers can try a candidate against the board and
//! simply drop it when it does not fit.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use blockfall_types::{
    Orientation, PieceKind, RotationDirection, BLOCKS_PER_PIECE, PREVIEW_SIZE,
};

use crate::geometry::{bottom_blocks, offsets};
use crate::grid::Grid;

/// A board position in piece space (may lie outside the board)
pub type CellPos = (i16, i16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub orientation: Orientation,
    /// Anchor column
    pub column: i16,
    /// Anchor row
    pub row: i16,
}

impl Piece {
    /// Create a piece in the spawn orientation
    pub fn new(kind: PieceKind, column: i16, row: i16) -> Self {
        Self {
            kind,
            orientation: Orientation::Zero,
            column,
            row,
        }
    }

    pub fn anchor(&self) -> CellPos {
        (self.column, self.row)
    }

    /// The four occupied positions, in block-index order
    pub fn cells(&self) -> [CellPos; BLOCKS_PER_PIECE] {
        offsets(self.kind, self.orientation).map(|(dc, dr)| (self.column + dc, self.row + dr))
    }

    /// Positions of the downward-facing blocks
    pub fn bottom_cells(&self) -> ArrayVec<CellPos, BLOCKS_PER_PIECE> {
        let cells = self.cells();
        bottom_blocks(self.kind, self.orientation)
            .iter()
            .map(|&idx| cells[idx])
            .collect()
    }

    pub fn rotated(&self, direction: RotationDirection) -> Self {
        Self {
            orientation: self.orientation.rotate(direction),
            ..*self
        }
    }

    pub fn translated(&self, d_column: i16, d_row: i16) -> Self {
        Self {
            column: self.column + d_column,
            row: self.row + d_row,
            ..*self
        }
    }
}

/// Draw `kind` in its spawn orientation onto a small grid for a preview panel
pub fn preview(kind: PieceKind) -> Grid<PieceKind> {
    let mut grid = Grid::new(PREVIEW_SIZE, PREVIEW_SIZE);
    for (column, row) in Piece::new(kind, 0, 0).cells() {
        grid.set(column as usize, row as usize, Some(kind));
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_follow_anchor() {
        let piece = Piece::new(PieceKind::T, 4, 2);
        assert_eq!(piece.cells(), [(5, 2), (4, 3), (5, 3), (6, 3)]);
        assert_eq!(piece.anchor(), (4, 2));
    }

    #[test]
    fn test_translated_keeps_orientation() {
        let piece = Piece::new(PieceKind::L, 4, 0).rotated(RotationDirection::Clockwise);
        let moved = piece.translated(-1, 3);
        assert_eq!(moved.orientation, Orientation::Ninety);
        assert_eq!(moved.anchor(), (3, 3));
        // Source piece unchanged.
        assert_eq!(piece.anchor(), (4, 0));
    }

    #[test]
    fn test_rotated_keeps_anchor() {
        let piece = Piece::new(PieceKind::S, 4, 5);
        let rotated = piece.rotated(RotationDirection::CounterClockwise);
        assert_eq!(rotated.orientation, Orientation::TwoSeventy);
        assert_eq!(rotated.anchor(), piece.anchor());
    }

    #[test]
    fn test_bottom_cells_of_horizontal_i() {
        let piece = Piece::new(PieceKind::I, 4, 0).rotated(RotationDirection::Clockwise);
        let bottom: Vec<_> = piece.bottom_cells().into_iter().collect();
        assert_eq!(bottom, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);

        let vertical = Piece::new(PieceKind::I, 4, 0);
        assert_eq!(vertical.bottom_cells().as_slice(), &[(4, 3)]);
    }

    #[test]
    fn test_preview_draws_four_cells() {
        for kind in PieceKind::ALL {
            let grid = preview(kind);
            assert_eq!(grid.occupied().count(), 4);
            assert!(grid.occupied().all(|(_, _, k)| k == kind));
        }
    }
}
