//! Text rendering for the CLI and dashboard
//!
//! Everything here returns `String` so the binaries decide where output
//! goes.

pub mod narrative;

#[cfg(test)]
mod tests;

pub use narrative::{customer_conclusion, Narrative};

use crate::customization::UiSettings;
use crate::sentiment::{AnalysisResult, BatchResult, ScoreVector, SentimentLabel};
use prettytable::{format, row, Table};
use std::fmt::Write;

const BAR_WIDTH: usize = 30;

/// Score shares as truncated whole percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareBreakdown {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl ShareBreakdown {
    pub fn from_scores(scores: &ScoreVector) -> Self {
        Self {
            positive: to_percent(scores.pos),
            neutral: to_percent(scores.neu),
            negative: to_percent(scores.neg),
        }
    }

    /// Sum of the truncated values (often 98 or 99, not 100)
    pub fn total(&self) -> u32 {
        self.positive + self.neutral + self.negative
    }
}

fn to_percent(share: f64) -> u32 {
    (share * 100.0) as u32
}

/// Map a compound score onto a -1..+1 bar
pub fn progress_bar(compound: f64, width: usize) -> String {
    let fraction = ((compound + 1.0) / 2.0).clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    format!("-1 [{}{}] +1", "#".repeat(filled), "-".repeat(width - filled))
}

/// Horizontal bar chart of the three score shares
pub fn distribution_chart(scores: &ScoreVector, width: usize) -> String {
    let rows = [
        (SentimentLabel::Positive, scores.pos),
        (SentimentLabel::Neutral, scores.neu),
        (SentimentLabel::Negative, scores.neg),
    ];

    let mut out = String::new();
    for (label, share) in rows {
        let filled = (share.clamp(0.0, 1.0) * width as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<8} |{:<width$}| {:>5.1}%",
            label.title(),
            "█".repeat(filled),
            share * 100.0,
            width = width
        );
    }
    out
}

/// Category → count table
pub fn summary_table(batch: &BatchResult) -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Category", "Count"]);
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        table.add_row(row![label.title(), batch.count(label)]);
    }
    table
}

/// Plain batch listing: one section per bucket, then the summary table
pub fn render_categorized(batch: &BatchResult) -> String {
    let mut out = String::new();
    for label in [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ] {
        let _ = writeln!(out, "\n{} Comments:", label.title());
        for review in batch.bucket(label) {
            let _ = writeln!(out, "- {}", review);
        }
    }
    let _ = writeln!(out, "\nSummary:");
    out.push_str(&summary_table(batch).to_string());
    out
}

fn render_breakdown(out: &mut String, scores: &ScoreVector, heading: &str) {
    let shares = ShareBreakdown::from_scores(scores);
    let _ = writeln!(
        out,
        "Positive: {}%   Neutral: {}%   Negative: {}%",
        shares.positive, shares.neutral, shares.negative
    );
    let _ = writeln!(out, "Total: {}%", shares.total());
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "{}", heading);
    let _ = writeln!(out, "{}", progress_bar(scores.compound, BAR_WIDTH));
    let _ = writeln!(out, "Score: {:.2}", scores.compound);
}

fn render_footer(out: &mut String, settings: &UiSettings) {
    if !settings.footer_text.is_empty() {
        let _ = writeln!(out, "---");
        let _ = writeln!(out, "{}", settings.footer_text);
    }
}

/// Dashboard panel for one review
pub fn render_single(result: &AnalysisResult, settings: &UiSettings) -> String {
    let mut out = String::new();
    render_breakdown(&mut out, &result.scores, "Sentiment Score:");

    let narrative = Narrative::select(result.scores.compound);
    let _ = writeln!(out, "{}", narrative.single_review_text());
    let _ = writeln!(out);
    let _ = writeln!(out, "Sentiment Distribution");
    out.push_str(&distribution_chart(&result.scores, BAR_WIDTH));
    render_footer(&mut out, settings);
    out
}

/// Dashboard panel for an uploaded batch
pub fn render_batch(batch: &BatchResult, settings: &UiSettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Analyzing {} reviews...", batch.total());
    render_breakdown(&mut out, &batch.average_scores, "Overall Sentiment Score:");

    let narrative = Narrative::select(batch.average_scores.compound);
    let _ = writeln!(out, "{}", narrative.batch_overall_text());
    let _ = writeln!(out);
    let _ = writeln!(out, "Review Breakdown");
    let _ = writeln!(out, "✅ Positive Reviews: {}", batch.positive.len());
    let _ = writeln!(out, "➖ Neutral Reviews: {}", batch.neutral.len());
    let _ = writeln!(out, "❌ Negative Reviews: {}", batch.negative.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "Sentiment Distribution");
    out.push_str(&distribution_chart(&batch.average_scores, BAR_WIDTH));
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "🎯 Analysis Summary");
    let _ = writeln!(out, "{}", narrative.batch_summary_text(batch));
    let _ = writeln!(out);
    let _ = writeln!(out, "🛒 Customer Conclusion");
    let _ = writeln!(out, "{}", customer_conclusion(batch));
    render_footer(&mut out, settings);
    out
}
