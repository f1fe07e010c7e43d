//! Review Sentiment Module
//!
//! Scores product reviews and sorts them into sentiment buckets.
//! Key pieces:
//! - `PolarityScorer` seam for any rule-based or external scorer
//! - `LexiconScorer`, the built-in VADER-style scorer
//! - `classify` threshold rule shared by every caller
//! - Single-review analysis and batch aggregation

pub mod analyzer;
pub mod lexicon;


pub use analyzer::{aggregate, analyze, AnalysisResult, BatchResult, ReviewAnalyzer};
pub use lexicon::LexiconScorer;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compound score at or above which a review is positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a review is negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Polarity scores for one text (or the mean over a batch)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreVector {
    /// Positive share (0.0 to 1.0)
    pub pos: f64,
    /// Neutral share (0.0 to 1.0)
    pub neu: f64,
    /// Negative share (0.0 to 1.0)
    pub neg: f64,
    /// Compound score (-1.0 to 1.0)
    pub compound: f64,
}

impl ScoreVector {
    /// All components zero. Used as the average of an empty batch.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scores for text that carries no sentiment at all
    pub fn neutral() -> Self {
        Self {
            pos: 0.0,
            neu: 1.0,
            neg: 0.0,
            compound: 0.0,
        }
    }

    /// Label for this vector's compound score
    pub fn label(&self) -> SentimentLabel {
        classify(self.compound)
    }

    /// Returns true if the shares sum to one and every component is in range
    pub fn is_consistent(&self) -> bool {
        let shares = [self.pos, self.neu, self.neg];
        shares.iter().all(|s| (0.0..=1.0).contains(s))
            && (shares.iter().sum::<f64>() - 1.0).abs() < 1e-9
            && (-1.0..=1.0).contains(&self.compound)
    }
}

/// Sentiment category of a review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Display order used by the dashboard breakdowns
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }

    /// Capitalized name for headings and tables
    pub fn title(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a compound score to a label.
///
/// `0.05` is positive, `-0.05` is negative, anything strictly between is
/// neutral. Out-of-range input is not clamped.
pub fn classify(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Anything that can turn a text into polarity scores
#[cfg_attr(test, mockall::automock)]
pub trait PolarityScorer {
    fn score(&self, text: &str) -> Result<ScoreVector>;
}
