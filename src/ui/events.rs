use crossterm::event::{self, Event, KeyEvent};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use crate::composer::Outcome;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A spawned `generate()`/`refine()` call returned.
    RequestFinished(Outcome),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Reads terminal input on a dedicated thread and merges it with request
/// completions into a single channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: EventSender,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if stop_flag.load(Ordering::Relaxed) {
                    break;
                }

                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "Failed to read terminal event");
                                break;
                            }
                        };
                        if let Some(event) = forwarded {
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to poll terminal events");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx, stop }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}
