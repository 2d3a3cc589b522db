//! Async driver - fall timer and command channel around a controller
//!
//! The controller itself never looks at a clock. This loop owns the timer:
//! it ticks the controller once per fall interval while the game is running,
//! applies commands as they arrive and forwards every queued event.
//!
//! The timer is stopped while paused, before start and after game over, and is
//! rebuilt whenever the level changes the interval or the game is reset. A
//! rebuilt timer always waits a full period before its first tick.
//!
//! A due fall tick is taken before queued commands, so a steady stream of
//! input cannot hold a piece in the air. The timer fires at most once per
//! interval, so commands are never starved in return.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, trace};

use blockfall_core::PieceSource;
use blockfall_types::Command;

use crate::controller::Controller;
use crate::event::GameEvent;

/// Run a game until the command sender or the event receiver goes away
///
/// `Command::Reset` restarts the game immediately. Returns the controller so
/// callers can inspect the final state.
pub async fn run<S: PieceSource>(
    mut controller: Controller<S>,
    mut commands: mpsc::Receiver<Command>,
    events: mpsc::UnboundedSender<GameEvent>,
) -> Controller<S> {
    let mut timer = FallTimer::default();
    controller.start();

    loop {
        for event in controller.take_events() {
            if events.send(event).is_err() {
                debug!("event receiver dropped, stopping driver");
                return controller;
            }
        }

        timer.sync(controller.is_running(), controller.tick_interval_ms());

        tokio::select! {
            biased;

            _ = timer.tick() => {
                controller.tick();
            }
            command = commands.recv() => match command {
                Some(Command::Reset) => {
                    controller.reset();
                    controller.start();
                    timer.stop();
                }
                Some(command) => {
                    let applied = controller.apply(command);
                    trace!(command = command.as_str(), applied, "command");
                }
                None => {
                    debug!("command channel closed, stopping driver");
                    break;
                }
            },
        }
    }

    // Flush whatever the last command produced.
    for event in controller.take_events() {
        if events.send(event).is_err() {
            break;
        }
    }
    controller
}

#[derive(Default)]
struct FallTimer {
    /// `(interval_ms, interval)` while running
    current: Option<(u32, Interval)>,
}

impl FallTimer {
    fn stop(&mut self) {
        if self.current.take().is_some() {
            debug!("fall timer stopped");
        }
    }

    fn sync(&mut self, running: bool, interval_ms: u32) {
        if !running {
            self.stop();
            return;
        }
        if matches!(self.current, Some((ms, _)) if ms == interval_ms) {
            return;
        }

        let period = Duration::from_millis(u64::from(interval_ms.max(1)));
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        debug!(interval_ms, "fall timer started");
        self.current = Some((interval_ms, interval));
    }

    async fn tick(&mut self) {
        match &mut self.current {
            Some((_, interval)) => {
                interval.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}
