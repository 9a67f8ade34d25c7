//! # Surf Report Rendering
//!
//! Terminal output for a [`SurfReport`]: a header with heights and swell
//! character, one horizontal bar per score component, and the two-swell
//! breakdown. [`Scorecard`] implements `Display`, so the same text can be
//! checked in tests and printed by the binary.

use crate::config::DisplayConfig;
use crate::report::SurfReport;
use crate::scoring::MAX_SCORE;
use crate::SwellInteraction;
use std::fmt;

const LABEL_WIDTH: usize = 12;

/// Horizontal bar for a score on the 0–10 scale.
fn score_bar(score: f64, width: usize) -> String {
    let filled = ((score / MAX_SCORE).clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    bar.push_str(&"█".repeat(filled));
    bar.push_str(&"░".repeat(width - filled));
    bar
}

/// ASCII scorecard for a report, rendered through [`fmt::Display`].
pub struct Scorecard<'a> {
    pub report: &'a SurfReport,
    pub bar_width: usize,
}

impl fmt::Display for Scorecard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        let metrics = &report.metrics;

        writeln!(
            f,
            "{} - {}",
            report.spot,
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        )?;
        writeln!(
            f,
            "Waves: {:.1} m ({:.1} ft), swell {:.1} m, breaking {:.1} m",
            metrics.height_meters, metrics.height_feet, metrics.swell_height, metrics.breaking_height
        )?;
        writeln!(
            f,
            "Swell: {} / {} - {}",
            report.swell.swell_type, report.swell.quality, report.swell.description
        )?;
        writeln!(f, "Energy: {} ({})", metrics.wave_energy, report.energy_label)?;
        writeln!(f)?;

        let score = &report.score;
        let rows = [
            ("Overall", score.overall_score),
            ("Waves", score.wave_quality),
            ("Wind", score.wind_quality),
            ("Tide", score.tide_optimal),
            ("Consistency", score.consistency_score),
        ];
        for (label, value) in rows {
            writeln!(
                f,
                "{:<width$}│{}│ {:>4.1}",
                label,
                score_bar(value, self.bar_width),
                value,
                width = LABEL_WIDTH
            )?;
        }
        writeln!(f)?;

        if report.interaction == SwellInteraction::SingleSwell {
            writeln!(f, "Single swell train")
        } else {
            writeln!(
                f,
                "Swell mix: {} (primary {}%, secondary {}%)",
                report.interaction, report.dominance.primary, report.dominance.secondary
            )
        }
    }
}

/// Render the ASCII scorecard for a report.
pub fn render_ascii(report: &SurfReport, bar_width: usize) -> String {
    Scorecard { report, bar_width }.to_string()
}

/// Print the scorecard to stdout.
pub fn draw_ascii(report: &SurfReport, display: &DisplayConfig) {
    print!(
        "{}",
        Scorecard {
            report,
            bar_width: display.bar_width,
        }
    );
}
