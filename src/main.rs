//! Headless blockfall runner (default binary).
//!
//! Plays a game on its own: for every spawned piece it sends a few random
//! moves and rotations followed by a hard drop, and logs each event. Useful
//! for soak-testing the engine and for eyeballing the event stream.
//!
//! ```text
//! blockfall [--seed N] [--uniform | --pieces-from KINDS] [--pieces N] [--snapshot]
//! ```
//!
//! Kinds come from a seeded 7-bag by default. `--uniform` draws each kind
//! independently; `--pieces-from iotsz` cycles a fixed list.
//!
//! Board size and fall speed come from `BLOCKFALL_COLUMNS`, `BLOCKFALL_ROWS`
//! and `BLOCKFALL_TICK_MS`; log verbosity from `RUST_LOG`.

use anyhow::{anyhow, Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{PieceSource, Sequence, SevenBag, SimpleRng, Uniform};
use blockfall::engine::{self, Controller, GameConfig, GameEvent};
use blockfall::types::{Command, PieceKind};

const USAGE: &str =
    "usage: blockfall [--seed N] [--uniform | --pieces-from KINDS] [--pieces N] [--snapshot]";

/// Where upcoming piece kinds come from
#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceChoice {
    SevenBag,
    Uniform,
    Fixed(Vec<PieceKind>),
}

impl SourceChoice {
    fn build(&self, seed: u32) -> Box<dyn PieceSource + Send> {
        match self {
            SourceChoice::SevenBag => Box::new(SevenBag::new(seed)),
            SourceChoice::Uniform => Box::new(Uniform::new(seed)),
            SourceChoice::Fixed(kinds) => Box::new(Sequence::new(kinds.clone())),
        }
    }
}

/// Parse a kind list such as `iotsz`
fn parse_kinds(text: &str) -> Result<Vec<PieceKind>> {
    let kinds = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            PieceKind::from_str(&c.to_string())
                .ok_or_else(|| anyhow!("invalid piece kind in --pieces-from: {}", c))
        })
        .collect::<Result<Vec<_>>>()?;
    if kinds.is_empty() {
        return Err(anyhow!("--pieces-from needs at least one kind"));
    }
    Ok(kinds)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunnerOptions {
    seed: u32,
    source: SourceChoice,
    /// Stop after this many locked pieces
    pieces: Option<u32>,
    /// Print the final snapshot as JSON
    snapshot: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            seed: 1,
            source: SourceChoice::SevenBag,
            pieces: None,
            snapshot: false,
        }
    }
}

/// Returns `None` when `--help` was requested.
fn parse_args(args: &[String]) -> Result<Option<RunnerOptions>> {
    let mut options = RunnerOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                options.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces"))?;
                options.pieces = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("invalid --pieces value: {}", v))?,
                );
            }
            "--uniform" => options.source = SourceChoice::Uniform,
            "--pieces-from" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --pieces-from"))?;
                options.source = SourceChoice::Fixed(parse_kinds(v)?);
            }
            "--snapshot" => options.snapshot = true,
            "-h" | "--help" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
            }
        }
        i += 1;
    }
    Ok(Some(options))
}

/// Random shift and rotation for one piece, ending in a hard drop
fn plan_moves(rng: &mut SimpleRng, columns: usize) -> Vec<Command> {
    let rotations = rng.next_range(4);
    let span = columns as u32;
    let shift = rng.next_range(span) as i64 - (span / 2) as i64;

    let mut commands = Vec::new();
    commands.extend((0..rotations).map(|_| Command::RotateCw));
    let step = if shift < 0 {
        Command::MoveLeft
    } else {
        Command::MoveRight
    };
    commands.extend((0..shift.unsigned_abs()).map(|_| step));
    commands.push(Command::HardDrop);
    commands
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::PieceSpawned(piece) => {
            debug!(kind = piece.kind.as_str(), column = piece.column, "spawned")
        }
        GameEvent::PieceMoved { to, .. } => {
            debug!(column = to.column, row = to.row, orientation = to.orientation.degrees(), "moved")
        }
        GameEvent::PieceLocked(cells) => debug!(?cells, "locked"),
        GameEvent::LinesCleared(collapse) => {
            info!(rows = ?collapse.rows, fallen = collapse.fallen.len(), "cleared")
        }
        GameEvent::LevelUp(level) => info!(level, "level up"),
        GameEvent::GameOver => info!("game over"),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(options) = parse_args(&args)? else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = GameConfig::from_env();
    let controller = Controller::new(config, options.source.build(options.seed))
        .context("invalid game configuration")?;
    info!(
        columns = config.columns,
        rows = config.rows,
        seed = options.seed,
        source = ?options.source,
        "starting headless game"
    );

    let (command_tx, command_rx) = mpsc::channel::<Command>(64);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<GameEvent>();
    let driver = tokio::spawn(engine::run(controller, command_rx, event_tx));

    let mut rng = SimpleRng::new(options.seed.wrapping_mul(31).wrapping_add(7));
    let mut locked = 0u32;
    while let Some(event) = event_rx.recv().await {
        log_event(&event);
        match event {
            GameEvent::PieceSpawned(_) => {
                for command in plan_moves(&mut rng, config.columns) {
                    command_tx
                        .send(command)
                        .await
                        .map_err(|_| anyhow!("driver stopped while sending {}", command.as_str()))?;
                }
            }
            GameEvent::PieceLocked(_) => {
                locked += 1;
                if options.pieces.is_some_and(|limit| locked >= limit) {
                    break;
                }
            }
            GameEvent::GameOver => break,
            _ => {}
        }
    }

    drop(command_tx);
    let controller = driver.await.context("driver task failed")?;
    info!(
        pieces = locked,
        lines = controller.lines(),
        score = controller.score(),
        level = controller.level(),
        "finished"
    );

    if options.snapshot {
        println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    }
    Ok(())
}
