//! Animated progress presentation for predictions
//!
//! The predictor never reports progress itself. A [`ProgressAnimation`]
//! replays scripted status messages and the finished prediction, step by
//! step, into any [`ProgressSink`].

use crate::config::PresentationConfig;
use crate::models::PredictionResult;
use std::io::{self, Write};
use std::time::Duration;
use tracing::debug;

pub const STARTING_MESSAGE: &str = "⏳ Model is starting...";
pub const READY_MESSAGE: &str = "Predictions ready! 🚀";

/// Scripted status messages shown while the model "works"
pub const STATUS_MESSAGES: [&str; 5] = [
    "Looking out in the sky... ☁️",
    "Checking for any signs of rain... 🌧️",
    "Solving some algebra... ➗",
    "Analyzing trends... 📊",
    "Finalizing predictions... 🔮",
];

const BAR_WIDTH: usize = 10;

/// Receives progress updates from a [`ProgressAnimation`]
pub trait ProgressSink {
    /// A status message was reached
    fn stage(&mut self, message: &str);
    /// Step `index` (0-based) of `total` has been charted
    fn step(&mut self, index: usize, total: usize, temperature: f64);
    /// All steps have been charted
    fn finish(&mut self);
}

/// Integer percentage reached after step `index` (0-based) of `total`
#[must_use]
pub fn percent_complete(index: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    (index + 1) * 100 / total
}

/// Writes progress as plain text, one line per update
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl ConsoleProgress<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self { out: io::stderr() }
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Best-effort: write failures are logged and dropped.
    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}") {
            debug!("Failed to write progress: {}", e);
        }
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn stage(&mut self, message: &str) {
        self.write_line(message);
    }

    fn step(&mut self, index: usize, total: usize, temperature: f64) {
        let percent = percent_complete(index, total);
        let filled = percent * BAR_WIDTH / 100;
        let bar = format!("{}{}", "#".repeat(filled), "·".repeat(BAR_WIDTH - filled));
        self.write_line(&format!(
            "Time {}: {temperature:.2} °C [{bar}] {percent}% Complete",
            index + 1
        ));
    }

    fn finish(&mut self) {
        self.write_line("Prediction Complete! 🎉");
    }
}

/// Timing of the scripted animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressAnimation {
    pub stage_delay: Duration,
    pub ready_delay: Duration,
    pub step_delay: Duration,
}

impl ProgressAnimation {
    /// An animation that emits every update without waiting
    #[must_use]
    pub fn instant() -> Self {
        Self {
            stage_delay: Duration::ZERO,
            ready_delay: Duration::ZERO,
            step_delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn from_config(config: &PresentationConfig) -> Self {
        if !config.animate {
            return Self::instant();
        }
        Self {
            stage_delay: Duration::from_millis(config.stage_delay_ms),
            ready_delay: Duration::from_millis(config.ready_delay_ms),
            step_delay: Duration::from_millis(config.step_delay_ms),
        }
    }

    /// Show the scripted status messages
    pub async fn play_stages<S: ProgressSink + ?Sized>(&self, sink: &mut S) {
        sink.stage(STARTING_MESSAGE);
        for message in STATUS_MESSAGES {
            sink.stage(message);
            pause(self.stage_delay).await;
        }
        sink.stage(READY_MESSAGE);
        pause(self.ready_delay).await;
    }

    /// Chart the predicted temperatures one step at a time
    pub async fn play_steps<S: ProgressSink + ?Sized>(&self, sink: &mut S, result: &PredictionResult) {
        let total = result.predicted_temperatures.len();
        for (index, &temperature) in result.predicted_temperatures.iter().enumerate() {
            sink.step(index, total, temperature);
            pause(self.step_delay).await;
        }
        sink.finish();
    }
}

async fn pause(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
