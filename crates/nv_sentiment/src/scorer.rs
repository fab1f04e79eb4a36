//! Valence-aware lexicon scoring.
//!
//! A pure rule-based scorer: word valences from the embedded lexicon,
//! adjusted for negation, degree adverbs, capitalization and punctuation
//! emphasis, then normalized into [-1, 1].

use nv_core::SentimentScorer;
use tracing::trace;

use crate::lexicon::{BOOSTERS, LEXICON, NEGATIONS};

/// Emphasis gained by an ALL-CAPS sentiment word in mixed-case text.
const CAPS_EMPHASIS: f64 = 0.733;
/// Negation flips and damps valence.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;
/// How far back modifiers reach, in words.
const MAX_LOOKBACK: usize = 3;
/// Per-`!` emphasis, capped at four marks.
const EXCLAMATION_AMPLIFIER: f64 = 0.292;
/// Per-`?` emphasis for two or three marks; more saturate at 0.96.
const QUESTION_AMPLIFIER: f64 = 0.18;
const QUESTION_AMPLIFIER_CAP: f64 = 0.96;

#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl LexiconScorer {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn score(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_cap_difference(&tokens);

        let mut valences = vec![0.0f64; tokens.len()];
        for (i, lower) in lowered.iter().enumerate() {
            let mut valence = match LEXICON.get(lower.as_str()) {
                Some(&v) => v,
                None => continue,
            };

            if cap_diff && is_all_caps(tokens[i]) {
                valence += CAPS_EMPHASIS * valence.signum();
            }

            let mut negated = false;
            for dist in 1..=MAX_LOOKBACK {
                if dist > i {
                    break;
                }
                let prev = lowered[i - dist].as_str();
                // a preceding sentiment word carries its own valence and
                // does not modify this one
                if LEXICON.contains_key(prev) {
                    continue;
                }
                if let Some(&boost) = BOOSTERS.get(prev) {
                    let mut scalar = if valence < 0.0 { -boost } else { boost };
                    if cap_diff && is_all_caps(tokens[i - dist]) {
                        scalar += CAPS_EMPHASIS * valence.signum();
                    }
                    scalar *= match dist {
                        2 => 0.95,
                        3 => 0.9,
                        _ => 1.0,
                    };
                    valence += scalar;
                }
                if NEGATIONS.contains(prev) {
                    negated = true;
                }
            }
            if negated {
                valence *= NEGATION_SCALAR;
            }

            valences[i] = valence;
        }

        // a contrastive "but" shifts weight onto the clause after it
        if let Some(but_idx) = lowered.iter().position(|w| w == "but") {
            for (i, valence) in valences.iter_mut().enumerate() {
                if i < but_idx {
                    *valence *= 0.5;
                } else if i > but_idx {
                    *valence *= 1.5;
                }
            }
        }

        let mut total: f64 = valences.iter().sum();
        if total != 0.0 {
            total += punctuation_emphasis(text) * total.signum();
        }

        let compound = normalize(total);
        trace!("scored {:.4} for {:?}", compound, text);
        compound
    }
}

fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.len() > 1
        && token.chars().any(|c| c.is_alphabetic())
        && token
            .chars()
            .all(|c| !c.is_alphabetic() || c.is_uppercase())
}

/// Capitalization only signals emphasis when the text mixes cases; a fully
/// shouted headline gets no differential boost.
fn has_cap_difference(tokens: &[&str]) -> bool {
    let any_caps = tokens.iter().any(|t| is_all_caps(t));
    let any_lower = tokens
        .iter()
        .any(|t| t.chars().any(|c| c.is_alphabetic()) && !is_all_caps(t));
    any_caps && any_lower
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4) as f64;
    let questions = text.matches('?').count();
    let question_amp = if questions > 1 {
        if questions <= 3 {
            questions as f64 * QUESTION_AMPLIFIER
        } else {
            QUESTION_AMPLIFIER_CAP
        }
    } else {
        0.0
    };
    exclamations * EXCLAMATION_AMPLIFIER + question_amp
}

fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + NORMALIZATION_ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer::new().score(text)
    }

    #[test]
    fn test_empty_text_scores_exactly_zero() {
        assert_eq!(score(""), 0.0);
        assert_eq!(score("   "), 0.0);
        assert_eq!(score("!!! ???"), 0.0);
    }

    #[test]
    fn test_neutral_text_scores_zero() {
        assert_eq!(score("the report was published on tuesday"), 0.0);
    }

    #[test]
    fn test_positive_and_negative_polarity() {
        assert!(score("good news for shareholders") > 0.0);
        assert!(score("terrible losses mount") < 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let plain = score("good");
        let negated = score("not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
    }

    #[test]
    fn test_negation_reaches_back_three_words() {
        assert!(score("never a very good sign") < 0.0);
    }

    #[test]
    fn test_intensifier_increases_magnitude() {
        assert!(score("very good") > score("good"));
        assert!(score("extremely bad") < score("bad"));
    }

    #[test]
    fn test_dampener_decreases_magnitude() {
        assert!(score("slightly good") < score("good"));
        assert!(score("slightly good") > 0.0);
    }

    #[test]
    fn test_caps_increase_magnitude_in_mixed_case() {
        assert!(score("GREAT results today") > score("great results today"));
        assert!(score("TERRIBLE results today") < score("terrible results today"));
    }

    #[test]
    fn test_exclamation_increases_magnitude() {
        assert!(score("good!") > score("good"));
        assert!(score("good!!!") > score("good!"));
        assert!(score("bad!!!") < score("bad"));
    }

    #[test]
    fn test_repeated_question_marks_increase_magnitude() {
        assert!(score("good???") > score("good"));
    }

    #[test]
    fn test_but_clause_shifts_weight() {
        assert!(score("good but terrible") < 0.0);
        assert!(score("terrible but good") > 0.0);
    }

    #[test]
    fn test_scores_stay_in_bounds() {
        let gushing = "amazing excellent outstanding wonderful great win success ".repeat(8);
        let grim = "terrible horrible crisis fraud bankruptcy crash losses ".repeat(8);
        let high = score(&gushing);
        let low = score(&grim);
        assert!(high > 0.9 && high <= 1.0);
        assert!(low < -0.9 && low >= -1.0);
    }

    #[test]
    fn test_scoring_is_pure() {
        let text = "Tesla shares surged after record profits!";
        assert_eq!(score(text), score(text));
    }
}
