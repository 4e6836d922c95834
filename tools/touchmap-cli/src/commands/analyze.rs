//! Parse a touch log, classify its gestures, and write the touch map.

use std::path::Path;

use touchmap_common::config::AppConfig;
use touchmap_getevent_parser::parse_file;
use touchmap_processing_core::{TouchAnalysis, TouchAnalyzer, TouchSummary};
use touchmap_render_engine::TouchMapRenderer;

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    /// The log held no committed touch samples; no image was written.
    NoData,
    Rendered(TouchAnalysis),
}

pub fn run(log_file: &Path, config: &AppConfig) -> anyhow::Result<()> {
    analyze(log_file, config).map(|_| ())
}

pub fn analyze(log_file: &Path, config: &AppConfig) -> anyhow::Result<Outcome> {
    println!(
        "Parsing log file with a {}s grouping threshold...",
        config.analysis.gesture_gap_secs
    );

    // Build the renderer first so a bad palette fails before the scan.
    let renderer = TouchMapRenderer::new(&config.screen, &config.render)
        .map_err(|e| anyhow::anyhow!("Invalid render settings: {e}"))?;

    let parsed = parse_file(log_file).map_err(|e| {
        if e.is_parse_error() {
            anyhow::anyhow!("Malformed touch log {}: {e}", log_file.display())
        } else {
            anyhow::anyhow!("Failed to read {}: {e}", log_file.display())
        }
    })?;
    tracing::debug!(stats = ?parsed.stats, "Scan finished");

    if parsed.is_empty() {
        println!("No touch coordinates were successfully parsed from the log file.");
        return Ok(Outcome::NoData);
    }

    let analysis = TouchAnalyzer::new(&config.analysis).analyze(parsed.points);
    for line in summary_lines(&analysis.summary) {
        println!("{line}");
    }

    let output = &config.render.output_path;
    renderer
        .render_to_file(&analysis.gestures, output)
        .map_err(|e| anyhow::anyhow!("Failed to save touch map: {e}"))?;
    println!("\nColored visualization saved as '{}'", output.display());

    Ok(Outcome::Rendered(analysis))
}

fn summary_lines(summary: &TouchSummary) -> Vec<String> {
    vec![
        format!(
            "Found and plotted {} touch points in {} distinct groups.",
            summary.total_points, summary.gesture_count
        ),
        format!(
            "Ghost touches: {} of {} points ({:.1}%) across {} ghost groups.",
            summary.ghost_points,
            summary.total_points,
            summary.ghost_percentage(),
            summary.ghost_gestures
        ),
    ]
}
