//! Lexicon Scorer
//!
//! VADER-style rule-based sentiment scoring tuned for product reviews.
//! Handles boosters, negation, idioms, capitalization, contrast ("but"),
//! punctuation emphasis and emojis.

use super::{PolarityScorer, ScoreVector};
use crate::error::Result;
use std::collections::HashMap;

/// How many preceding tokens a booster or negation reaches
const MODIFIER_WINDOW: usize = 3;
const NEGATION_SCALAR: f64 = -0.74;
const CAPS_INCREMENT: f64 = 0.733;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const MAX_QUESTION_EMPHASIS: f64 = 0.96;
const BEFORE_BUT_SCALAR: f64 = 0.5;
const AFTER_BUT_SCALAR: f64 = 1.5;
/// Normalization constant for the compound score
const ALPHA: f64 = 15.0;

/// A whitespace token with its cleaned lookup form
struct Token<'a> {
    raw: &'a str,
    clean: String,
}

/// Sentiment scorer using a lexicon-based approach
pub struct LexiconScorer {
    /// Word valences on a -4.0 to 4.0 scale
    lexicon: HashMap<String, f64>,
    /// Emoji valences
    emoji_lexicon: HashMap<char, f64>,
    /// Intensity modifiers (very, slightly, etc.)
    boosters: HashMap<String, f64>,
    /// Negation words
    negations: Vec<String>,
    /// Multi-word phrases whose valence replaces their parts
    idioms: HashMap<String, f64>,
}

impl LexiconScorer {
    /// Create a new scorer with the default lexicons
    pub fn new() -> Self {
        let mut scorer = Self {
            lexicon: HashMap::new(),
            emoji_lexicon: HashMap::new(),
            boosters: HashMap::new(),
            negations: Vec::new(),
            idioms: HashMap::new(),
        };
        scorer.init_lexicons();
        scorer
    }

    fn init_lexicons(&mut self) {
        let positive_words = [
            ("good", 1.9),
            ("great", 3.1),
            ("excellent", 2.7),
            ("amazing", 2.8),
            ("awesome", 3.1),
            ("fantastic", 2.6),
            ("wonderful", 2.7),
            ("perfect", 2.7),
            ("best", 3.2),
            ("love", 3.2),
            ("loved", 2.9),
            ("loves", 2.7),
            ("like", 1.5),
            ("happy", 2.7),
            ("glad", 2.0),
            ("satisfied", 1.8),
            ("pleased", 1.9),
            ("impressed", 2.1),
            ("impressive", 2.3),
            ("recommend", 1.5),
            ("recommended", 1.5),
            ("worth", 0.9),
            ("nice", 1.8),
            ("beautiful", 2.9),
            ("brilliant", 2.8),
            ("superb", 3.1),
            ("outstanding", 3.0),
            ("reliable", 1.7),
            ("sturdy", 1.2),
            ("durable", 1.2),
            ("comfortable", 1.5),
            ("helpful", 1.8),
            ("enjoy", 2.2),
            ("enjoyed", 2.3),
            ("fine", 0.8),
            ("decent", 1.1),
            ("okay", 0.9),
            ("ok", 1.2),
            ("special", 1.7),
            ("quick", 1.0),
            ("easy", 1.9),
            ("solid", 1.4),
        ];

        let negative_words = [
            ("bad", -2.5),
            ("terrible", -2.1),
            ("awful", -2.0),
            ("horrible", -2.5),
            ("poor", -2.1),
            ("worst", -3.1),
            ("hate", -2.7),
            ("hated", -3.2),
            ("disappointed", -1.9),
            ("disappointing", -2.2),
            ("disappointment", -2.3),
            ("broke", -1.8),
            ("broken", -1.5),
            ("useless", -1.8),
            ("waste", -1.8),
            ("wasted", -2.2),
            ("defective", -1.9),
            ("faulty", -1.5),
            ("junk", -1.6),
            ("garbage", -2.1),
            ("annoying", -1.7),
            ("frustrating", -2.0),
            ("frustrated", -2.4),
            ("angry", -2.3),
            ("sad", -2.1),
            ("unhappy", -1.8),
            ("fail", -2.5),
            ("failed", -2.3),
            ("problem", -1.7),
            ("problems", -1.7),
            ("slow", -1.0),
            ("ugly", -2.3),
            ("flimsy", -1.4),
            ("mediocre", -1.0),
            ("regret", -1.9),
            ("avoid", -1.2),
            ("rude", -2.0),
            ("scam", -2.9),
            ("cheaply", -1.1),
            ("uncomfortable", -1.6),
        ];

        for (word, score) in positive_words.iter().chain(negative_words.iter()) {
            self.lexicon.insert(word.to_string(), *score);
        }

        let emojis = [
            ('😊', 2.0),
            ('😍', 3.0),
            ('😃', 2.0),
            ('🙂', 1.2),
            ('👍', 1.5),
            ('❤', 2.5),
            ('⭐', 1.0),
            ('😞', -2.0),
            ('😔', -1.8),
            ('😡', -2.5),
            ('😠', -2.3),
            ('👎', -1.5),
            ('💔', -2.0),
            ('🤬', -3.0),
        ];

        for (emoji, score) in emojis {
            self.emoji_lexicon.insert(emoji, score);
        }

        let boosters = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.4),
            ("completely", 1.4),
            ("totally", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("incredibly", 1.4),
            ("highly", 1.3),
            ("truly", 1.3),
            ("quite", 1.1),
            // Dampeners
            ("slightly", 0.7),
            ("somewhat", 0.8),
            ("barely", 0.6),
            ("marginally", 0.7),
            ("fairly", 0.9),
            ("kinda", 0.8),
        ];

        for (word, factor) in boosters {
            self.boosters.insert(word.to_string(), factor);
        }

        self.negations = [
            "not", "no", "never", "none", "neither", "nor", "nobody", "nothing", "nowhere",
            "without", "nope", "isn't", "aren't", "wasn't", "weren't", "hasn't", "haven't",
            "hadn't", "doesn't", "don't", "didn't", "won't", "wouldn't", "can't", "cannot",
            "couldn't", "shouldn't", "isnt", "arent", "wasnt", "doesnt", "dont", "didnt",
            "wont", "cant", "couldnt", "shouldnt",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();

        let idioms = [
            ("nothing special", -0.9),
            ("waste of money", -2.5),
            ("worth every penny", 2.5),
            ("fell apart", -1.8),
            ("does the job", 1.2),
            ("not bad", 1.5),
        ];

        for (phrase, score) in idioms {
            self.idioms.insert(phrase.to_string(), score);
        }
    }

    /// Score text into polarity shares and a compound score
    pub fn polarity_scores(&self, text: &str) -> ScoreVector {
        let tokens = self.tokenize(text);
        let mixed_case = has_mixed_case(&tokens);

        let mut valences = vec![0.0; tokens.len()];
        for i in 0..tokens.len() {
            if let Some((span, score)) = self.match_idiom(&tokens, i) {
                for v in &mut valences[i + 1 - span..i] {
                    *v = 0.0;
                }
                valences[i] = score;
            } else {
                valences[i] = self.word_valence(&tokens, i, mixed_case);
            }
        }

        if let Some(pivot) = tokens.iter().position(|t| t.clean == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= BEFORE_BUT_SCALAR;
                } else if i > pivot {
                    *v *= AFTER_BUT_SCALAR;
                }
            }
        }

        // Emojis count as extra sentiment units
        for c in text.chars() {
            if let Some(&score) = self.emoji_lexicon.get(&c) {
                valences.push(score);
            }
        }

        self.score_valences(&valences, punctuation_emphasis(text))
    }

    fn score_valences(&self, valences: &[f64], emphasis: f64) -> ScoreVector {
        if valences.is_empty() {
            return ScoreVector::neutral();
        }

        let mut sum: f64 = valences.iter().sum();
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }
        let compound = normalize(sum);

        let mut positive_sum = 0.0;
        let mut negative_sum = 0.0;
        let mut neutral_count = 0.0;
        for &v in valences {
            if v > 0.0 {
                positive_sum += v + 1.0;
            } else if v < 0.0 {
                negative_sum += v.abs() + 1.0;
            } else {
                neutral_count += 1.0;
            }
        }

        if positive_sum > negative_sum {
            positive_sum += emphasis;
        } else if negative_sum > positive_sum {
            negative_sum += emphasis;
        }

        let total = positive_sum + negative_sum + neutral_count;
        if total <= 0.0 {
            return ScoreVector::neutral();
        }

        ScoreVector {
            pos: positive_sum / total,
            neu: neutral_count / total,
            neg: negative_sum / total,
            compound,
        }
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        text.split_whitespace()
            .filter_map(|raw| {
                let clean = self.clean_word(raw);
                (!clean.is_empty()).then_some(Token { raw, clean })
            })
            .collect()
    }

    /// Clean a word by removing punctuation
    fn clean_word(&self, word: &str) -> String {
        word.chars()
            .map(|c| if c == '\u{2019}' { '\'' } else { c })
            .filter(|c| c.is_alphanumeric() || *c == '\'' || *c == '-')
            .collect::<String>()
            .trim_matches(|c| c == '\'' || c == '-')
            .to_lowercase()
    }

    /// Longest idiom ending at `index`, as (word count, valence)
    fn match_idiom(&self, tokens: &[Token<'_>], index: usize) -> Option<(usize, f64)> {
        (2..=3usize).rev().find_map(|span| {
            if index + 1 < span {
                return None;
            }
            let phrase = tokens[index + 1 - span..=index]
                .iter()
                .map(|t| t.clean.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            self.idioms.get(&phrase).map(|&score| (span, score))
        })
    }

    /// Valence of one token after caps emphasis, boosters and negation
    fn word_valence(&self, tokens: &[Token<'_>], index: usize, mixed_case: bool) -> f64 {
        let Some(&base) = self.lexicon.get(&tokens[index].clean) else {
            return 0.0;
        };

        let mut score = base;
        if mixed_case && is_all_caps(tokens[index].raw) {
            score += CAPS_INCREMENT.copysign(score);
        }

        let start = index.saturating_sub(MODIFIER_WINDOW);
        for prev in &tokens[start..index] {
            if let Some(&factor) = self.boosters.get(&prev.clean) {
                score *= factor;
            }
            if self.negations.contains(&prev.clean) {
                score *= NEGATION_SCALAR;
            }
        }

        score
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn score(&self, text: &str) -> Result<ScoreVector> {
        Ok(self.polarity_scores(text))
    }
}

/// Normalize a raw valence sum into -1 to 1
fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn is_all_caps(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    letters.peek().is_some() && letters.all(|c| c.is_uppercase())
}

/// True when some, but not all, tokens are shouted
fn has_mixed_case(tokens: &[Token<'_>]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t.raw)).count();
    caps > 0 && caps < tokens.len()
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => MAX_QUESTION_EMPHASIS,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::SentimentLabel;

    #[test]
    fn test_positive_review() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("This product is amazing! Really satisfied with the quality.");
        assert_eq!(result.label(), SentimentLabel::Positive);
        assert!(result.compound > 0.5);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_negative_review() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("Worst purchase ever, completely disappointed.");
        assert_eq!(result.label(), SentimentLabel::Negative);
        assert!(result.compound < -0.5);
        assert_eq!(result.pos, 0.0);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_neutral_review() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("The product is okay, nothing special.");
        assert_eq!(result.label(), SentimentLabel::Neutral);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_empty_text() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("");
        assert_eq!(result, ScoreVector::neutral());

        let blank = scorer.polarity_scores("   \n\t ");
        assert_eq!(blank, ScoreVector::neutral());
    }

    #[test]
    fn test_no_sentiment_words() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("It arrived on Tuesday.");
        assert_eq!(result.compound, 0.0);
        assert_eq!(result.neu, 1.0);
    }

    #[test]
    fn test_booster_words() {
        let scorer = LexiconScorer::new();
        let normal = scorer.polarity_scores("This is good");
        let boosted = scorer.polarity_scores("This is extremely good");
        assert!(boosted.compound > normal.compound);
    }

    #[test]
    fn test_dampener_words() {
        let scorer = LexiconScorer::new();
        let normal = scorer.polarity_scores("This is good");
        let dampened = scorer.polarity_scores("This is slightly good");
        assert!(dampened.compound < normal.compound);
        assert!(dampened.compound > 0.0);
    }

    #[test]
    fn test_negation() {
        let scorer = LexiconScorer::new();
        let positive = scorer.polarity_scores("This is good");
        let negated = scorer.polarity_scores("This is not good");
        assert!(positive.compound > 0.0);
        assert!(negated.compound < 0.0);
    }

    #[test]
    fn test_curly_apostrophe_negation() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("It doesn\u{2019}t feel sturdy");
        assert!(result.compound < 0.0);
    }

    #[test]
    fn test_idiom_overrides_parts() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("Honestly a waste of money");
        assert_eq!(result.label(), SentimentLabel::Negative);

        let penny = scorer.polarity_scores("Worth every penny");
        assert_eq!(penny.label(), SentimentLabel::Positive);
        assert!(penny.compound > scorer.polarity_scores("Worth it").compound);
    }

    #[test]
    fn test_caps_emphasis() {
        let scorer = LexiconScorer::new();
        let plain = scorer.polarity_scores("The zipper is bad");
        let shouted = scorer.polarity_scores("The zipper is BAD");
        assert!(shouted.compound < plain.compound);
    }

    #[test]
    fn test_all_caps_text_not_emphasized() {
        let scorer = LexiconScorer::new();
        let plain = scorer.polarity_scores("the zipper is bad");
        let shouted = scorer.polarity_scores("THE ZIPPER IS BAD");
        assert!((shouted.compound - plain.compound).abs() < 1e-12);
    }

    #[test]
    fn test_but_shifts_weight() {
        let scorer = LexiconScorer::new();
        let result = scorer.polarity_scores("The color is nice but the fabric is terrible");
        assert_eq!(result.label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_exclamation_emphasis() {
        let scorer = LexiconScorer::new();
        let calm = scorer.polarity_scores("Great blender");
        let excited = scorer.polarity_scores("Great blender!!!");
        assert!(excited.compound > calm.compound);
        assert!(excited.pos > calm.pos);

        let capped = scorer.polarity_scores("Great blender!!!!!!!!");
        let four = scorer.polarity_scores("Great blender!!!!");
        assert!((capped.compound - four.compound).abs() < 1e-12);
    }

    #[test]
    fn test_emoji_sentiment() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity_scores("😍😍").label(), SentimentLabel::Positive);
        assert_eq!(scorer.polarity_scores("👎").label(), SentimentLabel::Negative);
    }

    #[test]
    fn test_compound_bounded() {
        let scorer = LexiconScorer::new();
        let text = "best best best best best best best best best best amazing awesome!!!!";
        let result = scorer.polarity_scores(text);
        assert!(result.compound <= 1.0);
        assert!(result.compound > 0.9);
        assert!(result.is_consistent());
    }

    #[test]
    fn test_clean_word() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.clean_word("hello!"), "hello");
        assert_eq!(scorer.clean_word("GREAT!!!"), "great");
        assert_eq!(scorer.clean_word("don't"), "don't");
        assert_eq!(scorer.clean_word("'quoted'"), "quoted");
        assert_eq!(scorer.clean_word("..."), "");
    }

    #[test]
    fn test_punctuation_emphasis() {
        assert_eq!(punctuation_emphasis("fine"), 0.0);
        assert_eq!(punctuation_emphasis("fine?"), 0.0);
        assert!((punctuation_emphasis("fine??") - 0.36).abs() < 1e-12);
        assert_eq!(punctuation_emphasis("fine?????"), MAX_QUESTION_EMPHASIS);
    }

    #[test]
    fn test_scorer_trait() {
        let scorer = LexiconScorer::default();
        let result = scorer.score("good").unwrap();
        assert_eq!(result.label(), SentimentLabel::Positive);
    }
}
