//! Default progression rules
//!
//! Scoring and leveling are not part of the rules engine proper. The
//! controller calls whatever functions the [`GameConfig`](crate::GameConfig)
//! carries; these are the defaults.

use blockfall_types::{LINES_PER_LEVEL, MIN_TICK_INTERVAL_MS, POINTS_PER_LINE, TICK_INTERVAL_STEP_MS};

/// Fall interval for a level: `initial` at level 1, 100ms faster per level
///
/// Never drops below [`MIN_TICK_INTERVAL_MS`].
pub fn stepped_tick_interval(initial_ms: u32, level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    initial_ms
        .saturating_sub(steps.saturating_mul(TICK_INTERVAL_STEP_MS))
        .max(MIN_TICK_INTERVAL_MS)
}

/// Level 1 until ten lines, then one level per ten lines
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Points for a clear: ten per line, times lines, times level
pub fn score_for_lines(cleared: u32, level: u32) -> u32 {
    POINTS_PER_LINE
        .saturating_mul(cleared)
        .saturating_mul(level)
}
