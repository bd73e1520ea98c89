//! Async runtime
//!
//! Single-threaded tick loop. `tokio::select!` waits on the interrupt
//! token, the terminal event stream and a fixed render interval; only the
//! loop touches the [`Session`], so key handling and rendering never
//! interleave.

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use super::clipboard::{Clipboard, NoClipboard, Osc52Clipboard};
use super::input::KeyInput;
use super::state::{Session, SessionAction};
use super::terminal::{TerminalGuard, ensure_interactive};
use super::{SessionError, ui};
use crate::config::Config;

/// Loop timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopTiming {
    pub tick: Duration,
    pub confirm_pause: Duration,
}

impl From<&Config> for LoopTiming {
    fn from(config: &Config) -> Self {
        Self {
            tick: config.tick,
            confirm_pause: config.confirm_pause,
        }
    }
}

/// Runs an interactive session on the real terminal.
///
/// The terminal is restored before this returns, whatever the outcome.
pub async fn run(config: &Config, cancel: CancellationToken) -> Result<Session, SessionError> {
    ensure_interactive()?;

    let mut clipboard: Box<dyn Clipboard> = if config.clipboard {
        Box::new(Osc52Clipboard::stdout())
    } else {
        Box::new(NoClipboard)
    };

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let events = EventStream::new();
    run_loop(
        &mut terminal,
        events,
        clipboard.as_mut(),
        LoopTiming::from(config),
        cancel,
    )
    .await
}

/// Drives a session until it exits.
///
/// The session ends on an interrupt key, on cancellation, or when the
/// event stream closes. Each tick advances the animation and redraws;
/// ticks missed under load are skipped rather than queued.
pub async fn run_loop<B, S, C>(
    terminal: &mut Terminal<B>,
    mut events: S,
    clipboard: &mut C,
    timing: LoopTiming,
    cancel: CancellationToken,
) -> Result<Session, SessionError>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>> + Unpin,
    C: Clipboard + ?Sized,
{
    let mut session = Session::new();
    let mut ticker = time::interval(timing.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!("Session started (tick {:?})", timing.tick);

    while session.is_running() {
        tokio::select! {
            biased;

            () = cancel.cancelled() => {
                tracing::info!("Session interrupted");
                session.interrupt();
            }

            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    let Some(key) = KeyInput::from_event(&event) else {
                        continue;
                    };
                    if let SessionAction::Confirm(message) = session.handle_key(key, clipboard) {
                        draw(terminal, &session, Some(message.as_str()))?;
                        pause(&mut session, timing.confirm_pause, &cancel).await;
                    }
                }
                Some(Err(e)) => return Err(SessionError::Io(e)),
                None => {
                    tracing::info!("Event stream closed");
                    session.interrupt();
                }
            },

            _ = ticker.tick() => {
                session.advance();
                draw(terminal, &session, None)?;
            }
        }
    }

    tracing::info!("Session exiting");
    Ok(session)
}

fn draw<B: Backend>(
    terminal: &mut Terminal<B>,
    session: &Session,
    banner: Option<&str>,
) -> Result<(), SessionError> {
    let payload = session.payload(banner);
    terminal
        .draw(|frame| ui::render(frame, &payload))
        .map_err(|e| SessionError::Render(e.to_string()))?;
    Ok(())
}

/// Holds the confirmation on screen; cancellation cuts it short.
async fn pause(session: &mut Session, duration: Duration, cancel: &CancellationToken) {
    tokio::select! {
        () = cancel.cancelled() => session.interrupt(),
        () = time::sleep(duration) => {}
    }
}
