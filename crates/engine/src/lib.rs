//! Game engine - controller state machine, progression and async driver
//!
//! Built on the pure rules in `blockfall-core`. The [`Controller`] is fully
//! synchronous and deterministic: it reacts to commands and to `tick()` calls
//! and queues a [`GameEvent`] for every transition. The [`driver`] module adds
//! the fall timer on top of tokio.
//!
//! # Example
//!
//! ```
//! use blockfall_core::Sequence;
//! use blockfall_engine::{Controller, GameConfig, GameEvent, Phase};
//! use blockfall_types::PieceKind;
//!
//! let mut game = Controller::new(GameConfig::default(), Sequence::new([PieceKind::O])).unwrap();
//! game.start();
//! game.hard_drop();
//!
//! let events = game.take_events();
//! assert!(matches!(events[0], GameEvent::PieceSpawned(_)));
//! assert!(events.iter().any(|e| matches!(e, GameEvent::PieceLocked(_))));
//! assert_eq!(game.phase(), Phase::Falling);
//! ```

pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod event;
pub mod progression;
pub mod snapshot;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::GameConfig;
pub use controller::{Controller, Phase};
pub use driver::run;
pub use error::ConfigError;
pub use event::{GameEvent, LockedCell};
pub use snapshot::GameSnapshot;
