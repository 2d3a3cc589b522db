//! Game configuration
//!
//! Board size, fall timing and the pluggable progression functions. Values
//! can come from [`GameConfig::default`] or from the environment:
//!
//! - `BLOCKFALL_COLUMNS`: board width (default 10)
//! - `BLOCKFALL_ROWS`: board height (default 20)
//! - `BLOCKFALL_TICK_MS`: fall interval at level 1 (default 600)
//!
//! Unparseable variables fall back to the default. Everything is checked by
//! [`GameConfig::validate`] when a controller is built.

use std::collections::BTreeSet;

use blockfall_core::{geometry, Piece};
use blockfall_types::{
    Orientation, PieceKind, DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_TICK_INTERVAL_MS,
};

use crate::error::ConfigError;
use crate::progression;

/// Smallest board that fits every spawn footprint
pub const MIN_BOARD_SIZE: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub columns: usize,
    pub rows: usize,
    /// Fall interval at level 1
    pub initial_tick_interval_ms: u32,
    /// `(initial_ms, level) -> ms`
    pub tick_interval_by_level: fn(u32, u32) -> u32,
    /// `total_lines -> level`
    pub level_for_lines: fn(u32) -> u32,
    /// `(lines_cleared_at_once, level) -> points`
    pub score_for_lines: fn(u32, u32) -> u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            initial_tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            tick_interval_by_level: progression::stepped_tick_interval,
            level_for_lines: progression::level_for_lines,
            score_for_lines: progression::score_for_lines,
        }
    }
}

impl GameConfig {
    /// Board of the given size, default timing and progression
    pub fn with_size(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let columns = env::var("BLOCKFALL_COLUMNS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.columns);

        let rows = env::var("BLOCKFALL_ROWS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.rows);

        let initial_tick_interval_ms = env::var("BLOCKFALL_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.initial_tick_interval_ms);

        Self {
            columns,
            rows,
            initial_tick_interval_ms,
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns < MIN_BOARD_SIZE || self.rows < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.columns > i16::MAX as usize || self.rows > i16::MAX as usize {
            return Err(ConfigError::BoardTooLarge {
                columns: self.columns,
                rows: self.rows,
            });
        }
        if self.initial_tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        geometry::validate()?;

        let (column, row) = self.spawn_anchor();
        for kind in PieceKind::ALL {
            let fits = Piece::new(kind, column, row).cells().iter().all(|&(c, r)| {
                c >= 0 && r >= 0 && (c as usize) < self.columns && (r as usize) < self.rows
            });
            if !fits {
                return Err(ConfigError::SpawnOutOfBounds { kind });
            }
        }

        Ok(())
    }

    /// Where new pieces appear: top row, centred
    pub fn spawn_anchor(&self) -> (i16, i16) {
        (((self.columns.max(1) - 1) / 2) as i16, 0)
    }

    /// Every cell some kind covers when it spawns, sorted
    ///
    /// A locked cell anywhere in this region ends the game.
    pub fn spawn_region(&self) -> Vec<(usize, usize)> {
        let (column, row) = self.spawn_anchor();
        let region: BTreeSet<(usize, usize)> = PieceKind::ALL
            .iter()
            .flat_map(|&kind| Piece::new(kind, column, row).cells())
            .filter(|&(c, r)| c >= 0 && r >= 0)
            .map(|(c, r)| (c as usize, r as usize))
            .filter(|&(c, r)| c < self.columns && r < self.rows)
            .collect();
        region.into_iter().collect()
    }

    /// Fall interval at `level`
    pub fn tick_interval_ms(&self, level: u32) -> u32 {
        (self.tick_interval_by_level)(self.initial_tick_interval_ms, level)
    }
}
