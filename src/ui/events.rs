use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Events consumed by the main loop.
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
}

/// Reads terminal events on a dedicated thread and forwards them over a
/// channel, interleaved with ticks. The main loop stays single-threaded:
/// every event is applied to completion before the next one is received.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match crossterm::event::poll(timeout) {
                    Ok(true) => {
                        let event = match crossterm::event::read() {
                            Ok(event) => event,
                            Err(_) => break,
                        };
                        let forwarded = match event {
                            Event::Key(key) => Some(AppEvent::Key(key)),
                            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
                            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
                            _ => None,
                        };
                        if let Some(event) = forwarded {
                            if tx.send(event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(_) => break,
                }

                if last_tick.elapsed() >= tick_rate {
                    if tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
