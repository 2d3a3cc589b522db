//! Grid module - fixed-size 2D storage
//!
//! A `columns x rows` container of optional cell values backed by a flat,
//! row-major vector. It knows nothing about pieces or boards, so it also backs
//! preview panels.
//!
//! Indices must satisfy `column < columns` and `row < rows`. Out-of-range
//! access is a bug in the caller and fails fast.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid<T> {
    columns: usize,
    rows: usize,
    /// Flat array of cells, row-major order (row * columns + column)
    cells: Vec<Option<T>>,
}

impl<T: Copy> Grid<T> {
    /// Create a grid with every slot empty
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    #[inline(always)]
    fn index(&self, column: usize, row: usize) -> usize {
        debug_assert!(
            column < self.columns && row < self.rows,
            "grid access ({}, {}) outside {}x{}",
            column,
            row,
            self.columns,
            self.rows
        );
        row * self.columns + column
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, column: usize, row: usize) -> Option<T> {
        self.cells[self.index(column, row)]
    }

    pub fn set(&mut self, column: usize, row: usize, value: Option<T>) {
        let idx = self.index(column, row);
        self.cells[idx] = value;
    }

    /// Whether a signed (piece-space) coordinate falls inside the grid
    pub fn contains(&self, column: i16, row: i16) -> bool {
        column >= 0 && row >= 0 && (column as usize) < self.columns && (row as usize) < self.rows
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Option<T>] {
        let start = self.index(0, row);
        &self.cells[start..start + self.columns]
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_some)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        self.row(row).iter().all(Option::is_none)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Occupied slots as `(column, row, value)`, top row first
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|v| (idx % columns, idx / columns, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.rows(), 3);
        assert!(grid.is_empty());
        for row in 0..3 {
            for column in 0..4 {
                assert_eq!(grid.get(column, row), None);
            }
        }
    }

    #[test]
    fn test_set_and_get_are_row_major() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 0, Some('a'));
        grid.set(0, 1, Some('b'));

        assert_eq!(grid.cells[3], Some('a'));
        assert_eq!(grid.cells[4], Some('b'));
        assert_eq!(grid.get(3, 0), Some('a'));

        grid.set(3, 0, None);
        assert_eq!(grid.get(3, 0), None);
    }

    #[test]
    fn test_contains_rejects_negative_and_overflow() {
        let grid: Grid<u8> = Grid::new(4, 3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(3, 2));
        assert!(!grid.contains(-1, 0));
        assert!(!grid.contains(0, -1));
        assert!(!grid.contains(4, 0));
        assert!(!grid.contains(0, 3));
    }

    #[test]
    fn test_row_queries() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 1, Some(1u8));
        assert!(!grid.is_row_full(1));
        assert!(!grid.is_row_empty(1));
        grid.set(1, 1, Some(2u8));
        assert!(grid.is_row_full(1));
        assert!(grid.is_row_empty(0));
        assert_eq!(grid.row(1), &[Some(1), Some(2)]);
    }

    #[test]
    fn test_occupied_reports_coordinates() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 0, Some(7u8));
        grid.set(1, 2, Some(9u8));
        let cells: Vec<_> = grid.occupied().collect();
        assert_eq!(cells, vec![(2, 0, 7), (1, 2, 9)]);
    }

    #[test]
    #[should_panic]
    fn test_column_out_of_range_panics() {
        let grid: Grid<u8> = Grid::new(4, 3);
        let _ = grid.get(4, 0);
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range_panics() {
        let mut grid: Grid<u8> = Grid::new(4, 3);
        grid.set(0, 3, Some(1));
    }
}
