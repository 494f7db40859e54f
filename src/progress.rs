//! Terminal liveness indicator shown while an API request is in flight.
//!
//! [`Spinner::start`] spawns one thread that redraws a single line every
//! 100ms. The returned [`SpinnerGuard`] owns that thread: `finish` stops and
//! joins it and prints a completion line, dropping the guard stops and joins
//! it silently. Either way the thread is gone before control returns.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
const TICK: Duration = Duration::from_millis(100);
const MESSAGE: &str = "Generating response...";
const LINE_WIDTH: usize = 30;

type Output = Box<dyn Write + Send>;

pub struct Spinner;

impl Spinner {
    /// Start animating on stdout.
    pub fn stdout() -> SpinnerGuard {
        Self::start(io::stdout())
    }

    pub fn start<W: Write + Send + 'static>(out: W) -> SpinnerGuard {
        let stop = Arc::new(AtomicBool::new(false));
        let mut out: Output = Box::new(out);

        let flag = stop.clone();
        let handle = thread::spawn(move || {
            for frame in FRAMES.iter().cycle() {
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                let _ = write!(out, "\r{MESSAGE} {frame}");
                let _ = out.flush();
                thread::park_timeout(TICK);
            }
            out
        });

        SpinnerGuard {
            stop,
            handle: Some(handle),
        }
    }

    /// A guard with no thread behind it, for non-interactive output.
    pub fn disabled() -> SpinnerGuard {
        SpinnerGuard {
            stop: Arc::new(AtomicBool::new(true)),
            handle: None,
        }
    }
}

pub struct SpinnerGuard {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<Output>>,
}

impl SpinnerGuard {
    /// Stop the animation and replace it with a completion line.
    pub fn finish(mut self, succeeded: bool) {
        let message = if succeeded {
            "Response generated!"
        } else {
            "Response failed."
        };
        self.halt(Some(message));
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    fn halt(&mut self, message: Option<&str>) {
        self.stop.store(true, Ordering::SeqCst);
        let Some(handle) = self.handle.take() else {
            return;
        };
        handle.thread().unpark();

        // a panicked spinner thread takes its writer with it; nothing to print
        if let Ok(mut out) = handle.join() {
            let line = match message {
                Some(message) => format!("\r{message:<LINE_WIDTH$}\n"),
                None => format!("\r{:LINE_WIDTH$}\r", ""),
            };
            let _ = out.write_all(line.as_bytes());
            let _ = out.flush();
        }
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.halt(None);
    }
}
