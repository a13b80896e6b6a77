//! Text and JSON rendering of predictions

use crate::models::{PredictionReport, PredictionResult};
use anyhow::{Context, Result};
use std::fmt::Write;
use std::io;

/// Human-readable prediction summary
#[must_use]
pub fn render_text(result: &PredictionResult) -> String {
    let mut out = String::from("Prediction Results\n\nPredicted Temperatures\n");
    for step in result.steps() {
        let _ = writeln!(out, "Time {}: {}", step.time, step.format_temperature());
    }

    out.push_str("\nPredicted Weather Types\n");
    for step in result.steps() {
        let _ = writeln!(out, "Time {}: {}", step.time, step.format_weather());
    }
    out
}

/// Pretty-printed JSON report
pub fn render_json(report: &PredictionReport) -> Result<String> {
    serde_json::to_string_pretty(report).with_context(|| "Failed to serialize prediction report")
}

/// Write rendered output and flush, surfacing a closed pipe as an error
pub fn write_output<W: io::Write>(out: &mut W, text: &str) -> crate::Result<()> {
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
