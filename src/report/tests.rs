//! Tests for report rendering

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::sentiment::{aggregate, analyze, LexiconScorer};

    fn batch_of(reviews: &[&str]) -> BatchResult {
        aggregate(reviews, &LexiconScorer::new()).unwrap()
    }

    #[test]
    fn test_narrative_selection() {
        assert_eq!(Narrative::select(0.2), Narrative::Positive);
        assert_eq!(Narrative::select(-0.2), Narrative::Negative);
        assert_eq!(Narrative::select(0.0), Narrative::Neutral);
        assert_eq!(Narrative::select(0.05), Narrative::Positive);
        assert_eq!(Narrative::select(-0.05), Narrative::Negative);
    }

    #[test]
    fn test_narrative_matches_classifier() {
        for i in -20..=20 {
            let c = i as f64 / 100.0;
            assert_eq!(Narrative::select(c).label(), crate::sentiment::classify(c));
        }
    }

    #[test]
    fn test_narrative_templates_distinct() {
        let all = [Narrative::Positive, Narrative::Negative, Narrative::Neutral];
        for a in all {
            for b in all {
                if a != b {
                    assert_ne!(a.single_review_text(), b.single_review_text());
                    assert_ne!(a.batch_overall_text(), b.batch_overall_text());
                }
            }
        }
    }

    #[test]
    fn test_share_breakdown_truncates() {
        let scores = ScoreVector {
            pos: 0.516,
            neu: 0.479,
            neg: 0.005,
            compound: 0.8,
        };
        let shares = ShareBreakdown::from_scores(&scores);
        assert_eq!(shares, ShareBreakdown { positive: 51, neutral: 47, negative: 0 });
        assert_eq!(shares.total(), 98);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(-1.0, 10), "-1 [----------] +1");
        assert_eq!(progress_bar(0.0, 10), "-1 [#####-----] +1");
        assert_eq!(progress_bar(1.0, 10), "-1 [##########] +1");
        assert_eq!(progress_bar(4.0, 4), "-1 [####] +1");
    }

    #[test]
    fn test_distribution_chart() {
        let chart = distribution_chart(&ScoreVector::neutral(), 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Positive"));
        assert!(lines[0].ends_with("0.0%"));
        assert!(lines[1].contains("██████████"));
        assert!(lines[1].ends_with("100.0%"));
        assert!(lines[2].starts_with("Negative"));
    }

    #[test]
    fn test_render_categorized_sections() {
        let batch = batch_of(&[
            "This product is amazing! Really satisfied with the quality.",
            "Worst purchase ever, completely disappointed.",
            "The product is okay, nothing special.",
        ]);
        let out = render_categorized(&batch);

        let pos = out.find("Positive Comments:").unwrap();
        let neg = out.find("Negative Comments:").unwrap();
        let neu = out.find("Neutral Comments:").unwrap();
        let summary = out.find("Summary:").unwrap();
        assert!(pos < neg && neg < neu && neu < summary);

        assert!(out.contains("- Worst purchase ever, completely disappointed."));
        assert!(out.contains("Category"));
        assert!(out.contains("Count"));
    }

    #[test]
    fn test_summary_table_counts() {
        let batch = batch_of(&["Great!", "Terrible.", "Awful.", "It is blue."]);
        let table = summary_table(&batch);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get_row(0).unwrap().get_cell(1).unwrap().get_content(), "1");
        assert_eq!(table.get_row(1).unwrap().get_cell(1).unwrap().get_content(), "2");
        assert_eq!(table.get_row(2).unwrap().get_cell(1).unwrap().get_content(), "1");
    }

    #[test]
    fn test_render_empty_batch() {
        let batch = batch_of(&[]);
        let out = render_batch(&batch, &UiSettings::default());
        assert!(out.contains("Analyzing 0 reviews..."));
        assert!(out.contains("Score: 0.00"));
        assert!(out.contains("Overall: Neutral Reviews"));
        assert!(out.contains("Total: 0%"));
    }

    #[test]
    fn test_render_single_positive() {
        let result = analyze("Absolutely love this product, worth every penny!", &LexiconScorer::new()).unwrap();
        let out = render_single(&result, &UiSettings::default());
        assert!(out.contains("Sentiment Score:"));
        assert!(out.contains(Narrative::Positive.single_review_text()));
        assert!(out.contains("Sentiment Distribution"));
    }

    #[test]
    fn test_render_single_footer() {
        let result = analyze("It meets my expectations.", &LexiconScorer::new()).unwrap();
        let settings = UiSettings {
            footer_text: "Powered by Acme".to_string(),
            ..Default::default()
        };
        let out = render_single(&result, &settings);
        assert!(out.contains(Narrative::Neutral.single_review_text()));
        assert!(out.trim_end().ends_with("Powered by Acme"));
    }

    #[test]
    fn test_render_batch_negative_summary() {
        let batch = batch_of(&[
            "Worst purchase ever, completely disappointed.",
            "The product broke after two days.",
            "Great color.",
        ]);
        let out = render_batch(&batch, &UiSettings::default());
        assert!(out.contains("Analyzing 3 reviews..."));
        assert!(out.contains("❌ Negative Reviews: 2"));
        assert!(out.contains("• 66% customers reported issues"));
        assert!(out.contains("🛒 Customer Conclusion\n⚠️ Consider Before Buying:"));
        assert!(out.contains("• 66% of customers reported concerns"));
    }

    #[test]
    fn test_customer_conclusion() {
        let positive = batch_of(&["Great!", "Love it", "Terrible."]);
        assert!(customer_conclusion(&positive).contains("66% of customers had a positive experience"));

        let empty = batch_of(&[]);
        assert!(customer_conclusion(&empty).starts_with("📝 Balanced Feedback"));
    }
}
