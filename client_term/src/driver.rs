//! Fixed-interval host loop
//!
//! The loop task is the only writer of the [`Match`]. Key presses are read on
//! a blocking thread and forwarded over a channel, so input is always applied
//! between ticks, never during one.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use game_core::{InputEvent, Match};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::input::{KeyAction, Keymap};
use crate::renderer::{draw_snapshot, draw_status_line, CellSurface};
use crate::terminal::TerminalSession;

/// Shown on the board when key-up events never arrive
pub const NO_KEY_RELEASE_NOTICE: &str =
    "Terminal cannot report key releases: paddles move until reversed";

/// Messages from the input thread to the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Input(InputEvent),
    Quit,
}

/// Tick the match at its configured interval until `Quit` arrives or every
/// sender is gone. `on_frame` runs after each tick with the updated match.
///
/// Late ticks are skipped rather than replayed; every tick is one fixed step.
pub async fn run_loop<F>(
    mut game: Match,
    mut events: mpsc::Receiver<HostEvent>,
    mut on_frame: F,
) -> Result<Match>
where
    F: FnMut(&Match) -> Result<()>,
{
    let period = Duration::from_millis(game.config().tick_interval_ms);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                game.tick();
                on_frame(&game)?;
            }
            event = events.recv() => match event {
                Some(HostEvent::Input(input)) => game.apply_input(input),
                Some(HostEvent::Quit) | None => break,
            }
        }
    }

    Ok(game)
}

/// Play in the terminal until the user quits
pub async fn run_interactive(game: Match) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let notice = (!session.reports_key_release()).then_some(NO_KEY_RELEASE_NOTICE);
    if notice.is_some() {
        tracing::warn!("terminal does not report key releases; paddles keep moving until another key is pressed");
    }

    let (tx, rx) = mpsc::channel::<HostEvent>(64);
    std::thread::spawn(move || read_keys(tx));

    let config = game.config().clone();
    let (cols, rows) = session.size()?;
    let mut surface = CellSurface::new(cols, rows, &config);

    tracing::info!(cols, rows, interval_ms = config.tick_interval_ms, "match started");

    let game = run_loop(game, rx, |game| {
        let size = session.size()?;
        if size != surface.size() {
            surface = CellSurface::new(size.0, size.1, &config);
        }
        draw_snapshot(&mut surface, &game.snapshot(), &config);
        if let Some(text) = notice {
            draw_status_line(&mut surface, text, &config);
        }
        session.present(&surface)
    })
    .await?;

    drop(session);
    let snapshot = game.snapshot();
    tracing::info!(
        ticks = snapshot.tick,
        left = snapshot.player1.score,
        right = snapshot.player2.score,
        "match ended"
    );
    Ok(())
}

/// Blocking key reader; exits once the loop stops listening
fn read_keys(tx: mpsc::Sender<HostEvent>) {
    let mut keymap = Keymap::new();
    loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                tracing::error!(%err, "failed to read terminal input");
                let _ = tx.blocking_send(HostEvent::Quit);
                return;
            }
        };
        let Event::Key(key) = event else {
            continue;
        };
        let host_event = match keymap.handle(key) {
            Some(KeyAction::Input(input)) => HostEvent::Input(input),
            Some(KeyAction::Quit) => HostEvent::Quit,
            None => continue,
        };
        if tx.blocking_send(host_event).is_err() {
            return;
        }
    }
}

/// Run `ticks` steps as fast as possible, writing one JSON snapshot per line
pub fn run_headless<W: Write>(game: &mut Match, ticks: u64, out: &mut W) -> Result<()> {
    for _ in 0..ticks {
        game.tick();
        serde_json::to_writer(&mut *out, &game.snapshot()).context("failed to encode snapshot")?;
        writeln!(out).context("failed to write snapshot")?;
    }
    out.flush().context("failed to flush snapshots")?;

    let snapshot = game.snapshot();
    tracing::info!(
        ticks,
        left = snapshot.player1.score,
        right = snapshot.player2.score,
        "headless run finished"
    );
    Ok(())
}
