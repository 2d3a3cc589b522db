//! Controller tests - game flow from spawn to game over

use blockfall::core::{Board, Grid, Sequence};
use blockfall::engine::{Controller, GameConfig, GameEvent, GameSnapshot, Phase};
use blockfall::types::{Command, PieceKind};

fn o_game(columns: usize, rows: usize) -> Controller<Sequence> {
    Controller::new(GameConfig::with_size(columns, rows), Sequence::new([PieceKind::O])).unwrap()
}

/// Drop one O against the left wall and one against the right wall
fn clear_two_rows(game: &mut Controller<Sequence>) {
    assert!(game.move_left());
    assert!(game.hard_drop());
    assert!(game.move_right());
    assert!(game.hard_drop());
}

#[test]
fn test_blocked_spawn_is_game_over() {
    let config = GameConfig::default();
    let mut grid = Grid::new(config.columns, config.rows);
    grid.set(5, 1, Some(PieceKind::Z));
    let board = Board::from_grid(grid);

    let mut game = Controller::with_board(config, Sequence::new([PieceKind::T]), board).unwrap();
    game.start();

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(game.falling().is_none());
    assert_eq!(game.take_events(), vec![GameEvent::GameOver]);
    assert_eq!(game.board().grid().occupied().count(), 1);
}

#[test]
fn test_move_left_at_wall_is_noop() {
    let mut game = o_game(10, 20);
    game.start();
    for _ in 0..4 {
        assert!(game.move_left());
    }
    let before = game.falling().unwrap();
    assert_eq!(before.column, 0);
    game.take_events();

    assert!(!game.move_left());
    assert!(!game.apply(Command::MoveLeft));
    assert_eq!(game.falling(), Some(before));
    assert!(game.take_events().is_empty());
}

#[test]
fn test_double_line_clear_event_order() {
    let mut game = o_game(4, 6);
    game.start();
    assert!(game.move_left());
    assert!(game.hard_drop());
    game.take_events();

    assert!(game.move_right());
    assert!(game.hard_drop());
    let events = game.take_events();
    assert!(matches!(events[0], GameEvent::PieceMoved { .. }));
    assert!(matches!(events[1], GameEvent::PieceMoved { .. }));
    assert!(matches!(events[2], GameEvent::PieceLocked(_)));
    match &events[3] {
        GameEvent::LinesCleared(collapse) => {
            assert_eq!(collapse.rows, vec![4, 5]);
            assert_eq!(collapse.removed.len(), 8);
            assert!(collapse.fallen.is_empty());
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(matches!(events[4], GameEvent::PieceSpawned(_)));
    assert_eq!(events.len(), 5);

    assert_eq!(game.lines(), 2);
    assert_eq!(game.score(), 20);
    assert!(game.board().grid().is_empty());
}

#[test]
fn test_level_up_after_ten_lines() {
    let mut game = o_game(4, 6);
    game.start();
    for _ in 0..4 {
        clear_two_rows(&mut game);
    }
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 80);
    game.take_events();

    clear_two_rows(&mut game);
    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 2);
    // The clear that levels up is scored at the old level.
    assert_eq!(game.score(), 100);
    assert_eq!(game.tick_interval_ms(), 500);

    let events = game.take_events();
    let cleared = events
        .iter()
        .position(|e| matches!(e, GameEvent::LinesCleared(_)))
        .unwrap();
    assert_eq!(events[cleared + 1], GameEvent::LevelUp(2));
}

#[test]
fn test_stack_to_top_ends_game() {
    let mut game = o_game(4, 6);
    game.start();
    let mut drops = 0;
    while game.phase() != Phase::GameOver {
        assert!(game.hard_drop());
        drops += 1;
        assert!(drops <= 2, "game should end once the stack enters the spawn region");
    }
    // The second O lands on rows 2-3, inside the spawn region.
    assert_eq!(drops, 2);

    let events = game.take_events();
    assert_eq!(events.last(), Some(&GameEvent::GameOver));
    assert_eq!(events.iter().filter(|e| **e == GameEvent::GameOver).count(), 1);
    assert!(!game.apply(Command::HardDrop));
    assert!(!game.apply(Command::SoftDropTick));
}

#[test]
fn test_pause_blocks_everything_but_resume() {
    let mut game = o_game(10, 20);
    game.start();
    assert!(game.apply(Command::Pause));
    let piece = game.falling();

    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::HardDrop,
        Command::SoftDropTick,
        Command::Pause,
    ] {
        assert!(!game.apply(command), "{:?} while paused", command);
    }
    assert!(!game.tick());
    assert_eq!(game.falling(), piece);

    assert!(game.apply(Command::Resume));
    assert!(game.apply(Command::SoftDropTick));
    assert_eq!(game.falling().unwrap().row, 1);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = o_game(4, 6);
    game.start();
    clear_two_rows(&mut game);
    game.hard_drop();
    assert!(game.lines() > 0);

    assert!(game.apply(Command::Reset));
    // Events from before the reset are still delivered.
    assert!(!game.take_events().is_empty());

    assert_eq!(game.phase(), Phase::Spawning);
    assert!(!game.started());
    assert!(!game.paused());
    assert!(game.falling().is_none());
    assert_eq!((game.level(), game.lines(), game.score()), (1, 0, 0));
    assert!(game.board().grid().is_empty());

    assert!(game.start());
    assert!(matches!(game.take_events()[..], [GameEvent::PieceSpawned(_)]));
}

#[test]
fn test_snapshot_json() {
    let mut game = o_game(10, 20);
    game.start();
    game.hard_drop();

    let snapshot = game.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.cell_at(4, 19), Some(PieceKind::O));
    assert_eq!(parsed.cell_at(4, 0), Some(PieceKind::O));
    assert_eq!(parsed.cell_at(0, 19), None);
    assert!(parsed.playable());
}
