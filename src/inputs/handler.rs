// inputs/handler.rs

//! Event handler that wraps crossterm input and tick event.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::*;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Sender;

pub enum Event {
    /// A key was pressed.
    Input(KeyEvent),
    /// No input during one tick.
    Tick,
}

/// Event handler that wraps crossterm input and tick event.
/// Terminal reads block, so they run on tokio's blocking pool and are
/// returned to a common `Receiver`.
pub struct EventHandler {
    rx: tokio::sync::mpsc::Receiver<Event>,
    // To stop the loop
    stop_capture: Arc<AtomicBool>,
}

impl EventHandler {
    /// Constructs a new instance of `EventHandler` with the given `tick_rate`.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = tokio::sync::mpsc::channel(100);
        let stop_capture = Arc::new(AtomicBool::new(false));

        let event_stop_capture = stop_capture.clone();
        tokio::task::spawn_blocking(move || {
            capture_events(&tx, &event_stop_capture, tick_rate, read_terminal)
        });

        EventHandler { rx, stop_capture }
    }

    /// Attempts to read an event.
    pub async fn next(&mut self) -> Event {
        self.rx.recv().await.unwrap_or(Event::Tick)
    }

    /// Stops the input capture loop.
    pub fn close(&mut self) {
        self.stop_capture.store(true, Ordering::Relaxed)
    }
}

/// Waits up to `tick_rate` for a terminal event.
fn read_terminal(tick_rate: Duration) -> io::Result<Option<crossterm::event::Event>> {
    if crossterm::event::poll(tick_rate)? {
        crossterm::event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forwards key presses and ticks from `source` until `stop` is set or the
/// receiver is dropped. A failing source is retried once per tick.
fn capture_events<F>(tx: &Sender<Event>, stop: &AtomicBool, tick_rate: Duration, mut source: F)
where
    F: FnMut(Duration) -> io::Result<Option<crossterm::event::Event>>,
{
    while !stop.load(Ordering::Relaxed) {
        let event = match source(tick_rate) {
            Ok(Some(crossterm::event::Event::Key(key_event)))
                if key_event.kind == KeyEventKind::Press =>
            {
                Event::Input(key_event)
            }
            Ok(Some(_)) => continue,
            Ok(None) => Event::Tick,
            Err(err) => {
                error!("Could not read terminal events: {}", err);
                std::thread::sleep(tick_rate);
                continue;
            }
        };
        if tx.blocking_send(event).is_err() {
            debug!("Event receiver dropped, stopping input capture");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::time::Instant;

    #[test]
    fn test_failing_source_waits_a_tick_and_sends_nothing() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);
        let stop = AtomicBool::new(false);
        let tick_rate = Duration::from_millis(20);
        let mut calls = 0;

        let started = Instant::now();
        capture_events(&tx, &stop, tick_rate, |_| {
            calls += 1;
            if calls == 3 {
                stop.store(true, Ordering::Relaxed);
            }
            Err(io::Error::other("terminal gone"))
        });

        assert_eq!(calls, 3);
        assert!(started.elapsed() >= tick_rate * 3);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_forwards_key_presses_and_ticks() {
        let (tx, mut rx) = tokio::sync::mpsc::channel(100);
        let stop = AtomicBool::new(false);
        let mut events = vec![
            Ok(Some(crossterm::event::Event::Key(KeyEvent::new(
                KeyCode::Char('t'),
                KeyModifiers::NONE,
            )))),
            Ok(Some(crossterm::event::Event::FocusGained)),
            Ok(None),
        ]
        .into_iter();

        capture_events(&tx, &stop, Duration::ZERO, |_| match events.next() {
            Some(event) => event,
            None => {
                stop.store(true, Ordering::Relaxed);
                Ok(None)
            }
        });

        assert!(matches!(rx.try_recv(), Ok(Event::Input(key)) if key.code == KeyCode::Char('t')));
        assert!(matches!(rx.try_recv(), Ok(Event::Tick)));
    }
}
