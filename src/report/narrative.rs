//! Narrative guidance keyed off a compound score

use crate::sentiment::{classify, BatchResult, SentimentLabel};

/// One of the three guidance templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Narrative {
    Positive,
    Negative,
    Neutral,
}

impl Narrative {
    /// Select the template for a compound score (single or batch average)
    pub fn select(compound: f64) -> Self {
        Self::from(classify(compound))
    }

    pub fn label(&self) -> SentimentLabel {
        match self {
            Narrative::Positive => SentimentLabel::Positive,
            Narrative::Negative => SentimentLabel::Negative,
            Narrative::Neutral => SentimentLabel::Neutral,
        }
    }

    /// Guidance shown under a single analyzed review
    pub fn single_review_text(&self) -> &'static str {
        match self {
            Narrative::Positive => {
                "Positive Review 😊\n\
                 • Product meets quality standards\n\
                 • Good customer satisfaction"
            }
            Narrative::Negative => {
                "Negative Review 😔\n\
                 Note: Our team has been notified about the concerns.\n\
                 • Feedback sent to product team\n\
                 • Quality improvement process initiated\n\
                 • Customer service will follow up"
            }
            Narrative::Neutral => {
                "Neutral Review 😐\n\
                 • Basic expectations met\n\
                 • Room for improvement noted"
            }
        }
    }

    /// One-line verdict for a batch
    pub fn batch_overall_text(&self) -> &'static str {
        match self {
            Narrative::Positive => "Overall: Positive Reviews 😊",
            Narrative::Negative => {
                "Overall: Negative Reviews 😔\n\
                 Note: Our team has been notified about the concerns, and we're working on improvements."
            }
            Narrative::Neutral => "Overall: Neutral Reviews 😐",
        }
    }

    /// Detailed batch summary, quoting the share of the matching bucket
    pub fn batch_summary_text(&self, batch: &BatchResult) -> String {
        match self {
            Narrative::Positive => format!(
                "✨ Product Analysis:\n\
                 • {}% customers reported positive experiences\n\
                 • Strong points: Product quality and satisfaction\n\
                 • Verdict: Recommended product with good customer feedback\n\
                 \n\
                 💡 Key Insights:\n\
                 • Product shows consistent quality and reliability\n\
                 • Good value for money investment\n\
                 • High customer satisfaction rate",
                batch.percentage(SentimentLabel::Positive)
            ),
            Narrative::Negative => format!(
                "⚠️ Product Analysis:\n\
                 • {}% customers reported issues\n\
                 • Common concerns: Product reliability and expectations\n\
                 • Verdict: Product improvement process initiated\n\
                 \n\
                 💡 Action Taken:\n\
                 • Seller has been notified of customer concerns\n\
                 • Quality improvement process in progress\n\
                 • Enhanced quality control measures being implemented\n\
                 • Customer feedback is being addressed",
                batch.percentage(SentimentLabel::Negative)
            ),
            Narrative::Neutral => "📝 Product Analysis:\n\
                 • Mixed feedback from customers\n\
                 • Product meets basic expectations\n\
                 • Verdict: Research specific features you need before purchase\n\
                 \n\
                 💡 Enhancement Suggestions:\n\
                 • Consider adding unique features\n\
                 • Focus on consistency in performance\n\
                 • Improve overall user experience"
                .to_string(),
        }
    }
}

impl From<SentimentLabel> for Narrative {
    fn from(label: SentimentLabel) -> Self {
        match label {
            SentimentLabel::Positive => Narrative::Positive,
            SentimentLabel::Negative => Narrative::Negative,
            SentimentLabel::Neutral => Narrative::Neutral,
        }
    }
}

/// Short buyer-facing conclusion for a batch
pub fn customer_conclusion(batch: &BatchResult) -> String {
    match Narrative::select(batch.average_scores.compound) {
        Narrative::Positive => format!(
            "✨ Product Highlights:\n\
             • {}% of customers had a positive experience\n\
             • Strong points: Quality and customer satisfaction\n\
             • Recommended for: Users looking for reliable products",
            batch.percentage(SentimentLabel::Positive)
        ),
        Narrative::Negative => format!(
            "⚠️ Consider Before Buying:\n\
             • {}% of customers reported concerns\n\
             • Common issues: Product durability and expectations\n\
             • Suggestion: Compare with similar products",
            batch.percentage(SentimentLabel::Negative)
        ),
        Narrative::Neutral => "📝 Balanced Feedback:\n\
             • Product meets basic expectations\n\
             • Mixed reviews on features and quality\n\
             • Consider your specific needs before purchase"
            .to_string(),
    }
}
