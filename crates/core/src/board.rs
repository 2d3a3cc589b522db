//! Board module - locked cells, collision and line clearing
//!
//! The board owns the grid of cells belonging to pieces that have come to
//! rest. It does not own the falling piece; the controller hands pieces in for
//! legality checks and, at the end of their fall, for locking.
//!
//! Coordinates: `(column, row)`, row 0 at the top, rows growing downward. A
//! cell "falls" by moving to a larger row index.

use std::collections::{BTreeMap, BTreeSet};

use blockfall_types::BLOCKS_PER_PIECE;

use crate::grid::Grid;
use crate::piece::Piece;

/// What a collapse removed and moved, for animating the transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collapse {
    /// Removed rows, ascending
    pub rows: Vec<usize>,
    /// Occupied cells that vanished with the removed rows
    pub removed: BTreeSet<(usize, usize)>,
    /// Surviving cells that moved: `(column, old_row) -> new_row`
    pub fallen: BTreeMap<(usize, usize), usize>,
}

impl Collapse {
    pub fn lines(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board<T> {
    grid: Grid<T>,
}

impl<T: Copy> Board<T> {
    /// Create an empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            grid: Grid::new(columns, rows),
        }
    }

    /// Wrap an existing grid (pre-built puzzles, tests)
    pub fn from_grid(grid: Grid<T>) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid<T> {
        &self.grid
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Check if a single position is inside the board and empty
    #[inline(always)]
    fn is_free(&self, column: i16, row: i16) -> bool {
        self.grid.contains(column, row) && self.grid.get(column as usize, row as usize).is_none()
    }

    /// True iff every cell of `piece` is inside the board and empty
    pub fn is_legal(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(c, r)| self.is_free(c, r))
    }

    /// Whether a piece sits on the floor or the stack
    ///
    /// Only the bottom blocks are inspected. For a legal piece this agrees with
    /// `!is_legal(&piece.translated(0, 1))`.
    pub fn is_resting(&self, piece: &Piece) -> bool {
        piece
            .bottom_cells()
            .iter()
            .any(|&(c, r)| !self.is_free(c, r + 1))
    }

    /// Lowest position the piece reaches by falling straight down
    pub fn landing(&self, piece: &Piece) -> Piece {
        let mut landed = *piece;
        loop {
            let next = landed.translated(0, 1);
            if !self.is_legal(&next) {
                return landed;
            }
            landed = next;
        }
    }

    /// Write the piece's cells into the grid
    ///
    /// `value_for_cell` receives the block index (0..4). Returns the written
    /// cells as `(column, row, value)`.
    ///
    /// # Panics
    ///
    /// If the piece is not legal on this board.
    pub fn lock(
        &mut self,
        piece: &Piece,
        mut value_for_cell: impl FnMut(usize) -> T,
    ) -> [(usize, usize, T); BLOCKS_PER_PIECE] {
        assert!(
            self.is_legal(piece),
            "lock of an illegal piece {:?} at {:?}",
            piece,
            piece.cells()
        );

        let cells = piece.cells();
        let locked: [(usize, usize, T); BLOCKS_PER_PIECE] = std::array::from_fn(|idx| {
            let (c, r) = cells[idx];
            (c as usize, r as usize, value_for_cell(idx))
        });
        for &(column, row, value) in &locked {
            self.grid.set(column, row, Some(value));
        }
        locked
    }

    /// Indices of every full row, scanned top to bottom (ascending)
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..self.rows()).filter(|&row| self.grid.is_row_full(row)).collect()
    }

    /// Remove `rows` and let everything above them fall
    ///
    /// A surviving cell falls by the number of removed rows strictly below it.
    /// The new grid is built off to the side and swapped in whole. Duplicate
    /// row indices are ignored.
    ///
    /// # Panics
    ///
    /// If any row index is outside the board.
    pub fn collapse(&mut self, rows: &[usize]) -> Collapse {
        let height = self.rows();
        let width = self.columns();
        let removing: BTreeSet<usize> = rows.iter().copied().collect();
        if let Some(&last) = removing.iter().next_back() {
            assert!(last < height, "collapse of row {} on a {}-row board", last, height);
        }

        let mut collapse = Collapse {
            rows: removing.iter().copied().collect(),
            ..Collapse::default()
        };
        if removing.is_empty() {
            return collapse;
        }

        let mut next = Grid::new(width, height);
        // Scan bottom to top; `shift` counts removed rows seen so far (all below).
        let mut shift = 0usize;
        for row in (0..height).rev() {
            if removing.contains(&row) {
                shift += 1;
                for column in 0..width {
                    if self.grid.get(column, row).is_some() {
                        collapse.removed.insert((column, row));
                    }
                }
                continue;
            }
            for column in 0..width {
                if let Some(value) = self.grid.get(column, row) {
                    next.set(column, row + shift, Some(value));
                    if shift > 0 {
                        collapse.fallen.insert((column, row), row + shift);
                    }
                }
            }
        }

        self.grid = next;
        collapse
    }

    /// Game-over check: any locked cell among `region`
    ///
    /// `region` lists `(column, row)` cells, normally every cell a freshly
    /// spawned piece could cover. Cells outside the board are ignored.
    pub fn is_full(&self, region: &[(usize, usize)]) -> bool {
        region.iter().any(|&(column, row)| {
            column < self.columns() && row < self.rows() && self.grid.get(column, row).is_some()
        })
    }
}
