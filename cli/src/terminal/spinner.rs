use std::io::Write;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Shows a spinner with `message` until [`stop`] is called.
pub fn start(message: &str) {
    let pb = init_spinner();
    pb.set_message(message.to_string());

    let mut slot = SPINNER.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(previous) = slot.replace(pb) {
        previous.finish_and_clear();
    }
}

pub fn stop() {
    let mut slot = SPINNER.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(pb) = slot.take() {
        pb.finish_and_clear();
    }
}

/// Log sink that keeps output from tearing through an active spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let slot = SPINNER.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(pb) => pb.suspend(|| std::io::stdout().write_all(buf))?,
            None => std::io::stdout().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
