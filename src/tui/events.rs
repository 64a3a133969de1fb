//! Event source: ticks and terminal input on one channel

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

/// Cadence of the animation heartbeat. The typewriter is cadence-independent,
/// so this only bounds how often the screen repaints.
pub const TICK_MS: u64 = 33;

#[derive(Debug, Clone, Copy)]
pub enum Event {
    Tick,
    Key(KeyEvent),
    Resize,
}

/// Multiplexes a fixed-cadence tick and crossterm input into one channel.
///
/// Both producer tasks are owned here and shut down on drop: the tick task
/// is aborted, while the blocking input reader notices the closed channel on
/// its next poll and exits. Either way no event can reach the app after it
/// is torn down, on any exit path.
pub struct Events {
    rx: mpsc::Receiver<Event>,
    tick_task: JoinHandle<()>,
    input_task: JoinHandle<()>,
}

impl Events {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel(64);

        let tick_tx = tx.clone();
        let tick_task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(tick_rate);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tick_tx.send(Event::Tick).await.is_err() {
                    break;
                }
            }
        });

        let input_task = tokio::task::spawn_blocking(move || {
            loop {
                if tx.is_closed() {
                    break;
                }
                // Short poll so a closed channel is noticed promptly.
                match event::poll(Duration::from_millis(100)) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            Ok(CrosstermEvent::Resize(..)) => Some(Event::Resize),
                            Ok(_) => None,
                            Err(_) => break,
                        };
                        if let Some(ev) = forwarded {
                            if tx.blocking_send(ev).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }
            }
            trace!("input task exiting");
        });

        Self {
            rx,
            tick_task,
            input_task,
        }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

impl Drop for Events {
    fn drop(&mut self) {
        self.tick_task.abort();
        // Abort cannot interrupt a running blocking closure; the reader
        // exits on its own once it sees the receiver is gone.
        self.input_task.abort();
    }
}
