//! Single-review analysis and batch aggregation
//!
//! Both paths share `classify`, so a review lands in the same bucket
//! whether it is analyzed alone or as part of a file.

use super::{classify, LexiconScorer, PolarityScorer, ScoreVector, SentimentLabel};
use crate::error::Result;
use serde::Serialize;

/// Scores and label for one review
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub text: String,
    pub scores: ScoreVector,
    pub sentiment: SentimentLabel,
}

/// Reviews bucketed by label plus the mean scores of the batch
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BatchResult {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
    pub average_scores: ScoreVector,
}

impl BatchResult {
    /// Reviews in the bucket for `label`, in input order
    pub fn bucket(&self, label: SentimentLabel) -> &[String] {
        match label {
            SentimentLabel::Positive => &self.positive,
            SentimentLabel::Neutral => &self.neutral,
            SentimentLabel::Negative => &self.negative,
        }
    }

    fn bucket_mut(&mut self, label: SentimentLabel) -> &mut Vec<String> {
        match label {
            SentimentLabel::Positive => &mut self.positive,
            SentimentLabel::Neutral => &mut self.neutral,
            SentimentLabel::Negative => &mut self.negative,
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.bucket(label).len()
    }

    /// (label, count) pairs in dashboard order
    pub fn counts(&self) -> [(SentimentLabel, usize); 3] {
        SentimentLabel::ALL.map(|label| (label, self.count(label)))
    }

    /// Number of reviews in the batch
    pub fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Share of reviews with `label` as a truncated whole percentage.
    ///
    /// The three values are truncated independently and need not sum to 100.
    pub fn percentage(&self, label: SentimentLabel) -> u32 {
        let total = self.total();
        if total == 0 {
            return 0;
        }
        (self.count(label) as f64 / total as f64 * 100.0) as u32
    }

    /// Label of the batch-average compound score
    pub fn overall(&self) -> SentimentLabel {
        classify(self.average_scores.compound)
    }
}

/// Running sums for the batch fold
#[derive(Debug, Default)]
struct ScoreSums {
    pos: f64,
    neu: f64,
    neg: f64,
    compound: f64,
}

impl ScoreSums {
    fn add(&mut self, scores: &ScoreVector) {
        self.pos += scores.pos;
        self.neu += scores.neu;
        self.neg += scores.neg;
        self.compound += scores.compound;
    }

    fn mean(&self, n: usize) -> ScoreVector {
        if n == 0 {
            return ScoreVector::zero();
        }
        let n = n as f64;
        ScoreVector {
            pos: self.pos / n,
            neu: self.neu / n,
            neg: self.neg / n,
            compound: self.compound / n,
        }
    }
}

/// Score and classify a single review
pub fn analyze<S>(text: &str, scorer: &S) -> Result<AnalysisResult>
where
    S: PolarityScorer + ?Sized,
{
    let scores = scorer.score(text)?;
    Ok(AnalysisResult {
        text: text.to_string(),
        scores,
        sentiment: classify(scores.compound),
    })
}

/// Score every review in order, bucket by label and average the scores.
///
/// A scorer error aborts the whole batch; no partial result is returned.
pub fn aggregate<S, T>(reviews: &[T], scorer: &S) -> Result<BatchResult>
where
    S: PolarityScorer + ?Sized,
    T: AsRef<str>,
{
    let mut batch = BatchResult::default();
    let mut sums = ScoreSums::default();

    for review in reviews {
        let analysis = analyze(review.as_ref(), scorer)?;
        sums.add(&analysis.scores);
        batch.bucket_mut(analysis.sentiment).push(analysis.text);
    }

    batch.average_scores = sums.mean(reviews.len());

    tracing::debug!(
        total = reviews.len(),
        positive = batch.positive.len(),
        neutral = batch.neutral.len(),
        negative = batch.negative.len(),
        compound = batch.average_scores.compound,
        "Aggregated review batch"
    );

    Ok(batch)
}

/// Scorer-owning front end used by the CLI and dashboard
pub struct ReviewAnalyzer<S = LexiconScorer> {
    scorer: S,
}

impl ReviewAnalyzer<LexiconScorer> {
    /// Analyzer backed by the built-in lexicon scorer
    pub fn new() -> Self {
        Self::with_scorer(LexiconScorer::new())
    }
}

impl Default for ReviewAnalyzer<LexiconScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PolarityScorer> ReviewAnalyzer<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }

    /// Single-review mode
    pub fn analyze_review(&self, text: &str) -> Result<AnalysisResult> {
        analyze(text, &self.scorer)
    }

    /// Batch mode
    pub fn analyze_reviews<T: AsRef<str>>(&self, reviews: &[T]) -> Result<BatchResult> {
        aggregate(reviews, &self.scorer)
    }
}
