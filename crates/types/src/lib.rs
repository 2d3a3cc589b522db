//! Shared types - piece kinds, orientations, commands and constants
//!
//! Everything here is plain data with no game logic, so the same definitions can
//! be used by the core rules, the engine state machine and any rendering or
//! input collaborator that sits outside this workspace.
//!
//! # Coordinates
//!
//! Positions are `(column, row)`:
//!
//! - **column** grows left to right, column 0 is the left wall
//! - **row** grows top to bottom, row 0 is the top of the board
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_INTERVAL_MS` | 600 | Fall interval at level 1 |
//! | `TICK_INTERVAL_STEP_MS` | 100 | Interval reduction per level |
//! | `MIN_TICK_INTERVAL_MS` | 50 | Fastest fall interval |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Orientation, PieceKind};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in columns
pub const DEFAULT_COLUMNS: usize = 10;

/// Default board height in rows
pub const DEFAULT_ROWS: usize = 20;

/// Fall interval at level 1 (milliseconds per row)
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 600;

/// How much faster the fall interval gets with each level
pub const TICK_INTERVAL_STEP_MS: u32 = 100;

/// Floor for the fall interval
pub const MIN_TICK_INTERVAL_MS: u32 = 50;

/// Lines needed to advance one level with the default progression
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cleared line (multiplied by line count and level)
pub const POINTS_PER_LINE: u32 = 10;

/// Side of the square next-piece preview grid
pub const PREVIEW_SIZE: usize = 4;

/// Number of blocks in every piece
pub const BLOCKS_PER_PIECE: usize = 4;

/// The seven piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, in declaration order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation state of a piece
///
/// The cycle goes Zero → Ninety → OneEighty → TwoSeventy → Zero when rotating
/// clockwise. Spawned pieces always start at `Zero`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Zero,
    Ninety,
    OneEighty,
    TwoSeventy,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::Zero,
        Orientation::Ninety,
        Orientation::OneEighty,
        Orientation::TwoSeventy,
    ];

    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use blockfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_cw(), Orientation::Ninety);
    /// assert_eq!(Orientation::TwoSeventy.rotate_cw(), Orientation::Zero);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::Ninety,
            Orientation::Ninety => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::Zero,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use blockfall_types::Orientation;
    ///
    /// assert_eq!(Orientation::Zero.rotate_ccw(), Orientation::TwoSeventy);
    /// assert_eq!(Orientation::Ninety.rotate_ccw(), Orientation::Zero);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Orientation::Zero => Orientation::TwoSeventy,
            Orientation::TwoSeventy => Orientation::OneEighty,
            Orientation::OneEighty => Orientation::Ninety,
            Orientation::Ninety => Orientation::Zero,
        }
    }

    /// Step one position in the given direction
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Clockwise => self.rotate_cw(),
            RotationDirection::CounterClockwise => self.rotate_ccw(),
        }
    }

    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Zero => 0,
            Orientation::Ninety => 90,
            Orientation::OneEighty => 180,
            Orientation::TwoSeventy => 270,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Player commands accepted by the controller
///
/// These are the whole command surface: input collaborators translate device
/// events into commands and never touch game state directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece to its landing row and lock it
    HardDrop,
    /// Force one fall tick now
    SoftDropTick,
    /// Stop the fall timer
    Pause,
    /// Restart the fall timer
    Resume,
    /// Return to the construction-time state
    Reset,
}

impl Command {
    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECCW"), Some(Command::RotateCcw));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "rotatecw" => Some(Command::RotateCw),
            "rotateccw" => Some(Command::RotateCcw),
            "harddrop" => Some(Command::HardDrop),
            "softdroptick" | "softdrop" => Some(Command::SoftDropTick),
            "pause" => Some(Command::Pause),
            "resume" => Some(Command::Resume),
            "reset" => Some(Command::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::RotateCw => "rotateCw",
            Command::RotateCcw => "rotateCcw",
            Command::HardDrop => "hardDrop",
            Command::SoftDropTick => "softDropTick",
            Command::Pause => "pause",
            Command::Resume => "resume",
            Command::Reset => "reset",
        }
    }
}
