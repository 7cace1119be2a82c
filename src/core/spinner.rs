//! Terminal spinner that coexists with log output
//!
//! The controller is a three-state machine:
//!
//! ```text
//!            start (tty)           pause
//!   Idle ─────────────────▶ Active ──────▶ Paused
//!    ▲                        │  ◀──────     │
//!    │        stop            │  resume(tty) │
//!    └────────────────────────┴──────────────┘
//! ```
//!
//! The controller itself holds no lock. It lives inside the owning backend's
//! state, so every transition runs under that backend's mutex. Only the
//! animation tick runs on its own thread, and that thread never touches
//! backend state.

use super::sink::Sink;
use crossbeam_channel::{bounded, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Braille dots animation.
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Delay between two animation frames.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Carriage return plus "erase to end of line".
const CLEAR_LINE: &str = "\r\x1b[K";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerState {
    Idle,
    Active,
    Paused,
}

/// Background thread drawing frames until its stop channel closes.
struct Animation {
    stop: Sender<()>,
    handle: JoinHandle<()>,
}

impl Animation {
    fn spawn(sink: Sink, message: String) -> Self {
        let (stop, ticks) = bounded::<()>(1);
        let handle = thread::spawn(move || {
            for frame in FRAMES.iter().cycle() {
                sink.emit(format!("\r{} {}", frame, message).as_bytes());
                match ticks.recv_timeout(TICK_INTERVAL) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    _ => break,
                }
            }
        });
        Self { stop, handle }
    }

    /// Stop drawing and wait for the last frame to land.
    fn halt(self) {
        drop(self.stop);
        if self.handle.join().is_err() {
            eprintln!("[LOGGER ERROR] Spinner animation thread panicked");
        }
    }
}

enum Phase {
    Idle,
    Active {
        sink: Sink,
        message: String,
        animation: Animation,
    },
    Paused {
        sink: Sink,
        message: String,
    },
}

pub struct SpinnerController {
    phase: Phase,
}

impl SpinnerController {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    pub fn state(&self) -> SpinnerState {
        match self.phase {
            Phase::Idle => SpinnerState::Idle,
            Phase::Active { .. } => SpinnerState::Active,
            Phase::Paused { .. } => SpinnerState::Paused,
        }
    }

    /// `Idle -> Active` when `sink` is a terminal. Otherwise nothing happens.
    pub fn start(&mut self, sink: &Sink, message: &str) {
        if !matches!(self.phase, Phase::Idle) || !sink.is_terminal() {
            return;
        }
        self.phase = Phase::Active {
            sink: sink.clone(),
            message: message.to_string(),
            animation: Animation::spawn(sink.clone(), message.to_string()),
        };
    }

    /// `Active -> Paused`. The partially drawn frame is erased so the next
    /// write starts on a clean line.
    pub fn pause(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active {
                sink,
                message,
                animation,
            } => {
                animation.halt();
                sink.emit(CLEAR_LINE.as_bytes());
                self.phase = Phase::Paused { sink, message };
            }
            other => self.phase = other,
        }
    }

    /// `Paused -> Active` while the destination is still a terminal.
    pub fn resume(&mut self) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Paused { sink, message } if sink.is_terminal() => {
                let animation = Animation::spawn(sink.clone(), message.clone());
                self.phase = Phase::Active {
                    sink,
                    message,
                    animation,
                };
            }
            other => self.phase = other,
        }
    }

    /// Follow the owner to a new destination. The frame on the old one is
    /// erased; the animation continues on `sink` only if it is a terminal,
    /// otherwise the spinner stays paused there.
    pub fn retarget(&mut self, sink: &Sink) {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => {}
            Phase::Active {
                sink: old,
                message,
                animation,
            } => {
                animation.halt();
                old.emit(CLEAR_LINE.as_bytes());
                self.phase = Phase::Paused {
                    sink: sink.clone(),
                    message,
                };
                self.resume();
            }
            Phase::Paused { message, .. } => {
                self.phase = Phase::Paused {
                    sink: sink.clone(),
                    message,
                };
            }
        }
    }

    /// `Active | Paused -> Idle`, drawing `final_line` in place of the
    /// spinner. Returns false when there was nothing to stop.
    pub fn stop(&mut self, final_line: &str) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Idle => false,
            Phase::Active {
                sink, animation, ..
            } => {
                animation.halt();
                sink.emit(format!("{}{}", CLEAR_LINE, final_line).as_bytes());
                true
            }
            Phase::Paused { sink, .. } => {
                sink.emit(final_line.as_bytes());
                true
            }
        }
    }
}

impl Default for SpinnerController {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SpinnerController {
    fn drop(&mut self) {
        if let Phase::Active {
            sink, animation, ..
        } = std::mem::replace(&mut self.phase, Phase::Idle)
        {
            animation.halt();
            sink.emit(CLEAR_LINE.as_bytes());
        }
    }
}
