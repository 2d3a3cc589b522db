//! Board tests - collision, locking and line clearing through the facade

use std::collections::BTreeSet;

use blockfall::core::{Board, Grid, Piece};
use blockfall::engine::GameConfig;
use blockfall::types::{Orientation, PieceKind, RotationDirection};

fn horizontal_i(column: i16, row: i16) -> Piece {
    Piece::new(PieceKind::I, column, row).rotated(RotationDirection::Clockwise)
}

#[test]
fn test_small_board_line_clear_scenario() {
    let mut board: Board<PieceKind> = Board::new(4, 4);
    let piece = horizontal_i(1, 3);
    assert_eq!(piece.orientation, Orientation::Ninety);
    assert!(board.is_legal(&piece));

    let locked = board.lock(&piece, |_| PieceKind::I);
    let cells: Vec<(usize, usize)> = locked.iter().map(|&(c, r, _)| (c, r)).collect();
    assert_eq!(cells, vec![(0, 3), (1, 3), (2, 3), (3, 3)]);

    let rows = board.completed_rows();
    assert_eq!(rows, vec![3]);

    let collapse = board.collapse(&rows);
    let expected: BTreeSet<(usize, usize)> = [(0, 3), (1, 3), (2, 3), (3, 3)].into_iter().collect();
    assert_eq!(collapse.removed, expected);
    assert!(collapse.fallen.is_empty());
    assert_eq!(collapse.lines(), 1);
    assert!(board.grid().is_empty());
}

#[test]
fn test_completed_rows_empty_board() {
    let board: Board<PieceKind> = Board::new(10, 20);
    assert!(board.completed_rows().is_empty());
}

#[test]
fn test_completed_rows_single_full_row() {
    let mut grid = Grid::new(10, 20);
    for column in 0..10 {
        grid.set(column, 12, Some(PieceKind::L));
    }
    grid.set(3, 11, Some(PieceKind::T));
    let board = Board::from_grid(grid);
    assert_eq!(board.completed_rows(), vec![12]);
}

#[test]
fn test_collapse_non_adjacent_rows() {
    let mut grid = Grid::new(4, 8);
    for column in 0..4 {
        grid.set(column, 7, Some(PieceKind::O));
        grid.set(column, 4, Some(PieceKind::O));
    }
    grid.set(1, 6, Some(PieceKind::S)); // between the removed rows
    grid.set(2, 2, Some(PieceKind::Z)); // above both
    let mut board = Board::from_grid(grid);

    let rows = board.completed_rows();
    assert_eq!(rows, vec![4, 7]);
    let collapse = board.collapse(&rows);

    assert_eq!(collapse.removed.len(), 8);
    assert_eq!(collapse.fallen.get(&(1, 6)), Some(&7));
    assert_eq!(collapse.fallen.get(&(2, 2)), Some(&4));
    assert_eq!(board.grid().get(1, 7), Some(PieceKind::S));
    assert_eq!(board.grid().get(2, 4), Some(PieceKind::Z));
    assert!(board.completed_rows().is_empty());
}

#[test]
fn test_landing_and_resting() {
    let mut board: Board<PieceKind> = Board::new(10, 20);
    let first = board.landing(&Piece::new(PieceKind::T, 4, 0));
    assert_eq!(first.row, 18);
    assert!(board.is_resting(&first));
    board.lock(&first, |_| PieceKind::T);

    // A vertical I over the T's raised middle block stops on it.
    let i = board.landing(&Piece::new(PieceKind::I, 5, 0));
    assert_eq!(i.row, 14);
    assert!(board.is_resting(&i));
    assert!(!board.is_legal(&i.translated(0, 1)));
}

#[test]
fn test_is_full_covers_every_spawn_cell() {
    let region = GameConfig::default().spawn_region();
    let (column, row) = GameConfig::default().spawn_anchor();

    // A lone cell beside the footprints leaves every kind free to spawn.
    let mut grid = Grid::new(10, 20);
    grid.set(6, 0, Some(PieceKind::I));
    let board = Board::from_grid(grid);
    assert!(!board.is_full(&region));
    for kind in PieceKind::ALL {
        assert!(board.is_legal(&Piece::new(kind, column, row)), "{:?}", kind);
    }

    // A column reaching (4, 1) blocks the region below the top row.
    let mut grid = Grid::new(10, 20);
    for r in 1..20 {
        grid.set(4, r, Some(PieceKind::I));
    }
    let board = Board::from_grid(grid);
    assert!(board.is_full(&region));
    assert!(!board.is_legal(&Piece::new(PieceKind::O, column, row)));
}
