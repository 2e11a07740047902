use super::lexicon::Lexicon;
use super::tokenizer::{punctuation_counts, tokenize};
use super::types::SentimentScores;

/// Added to a valence when the word is shouted in otherwise mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a valence for each negation in its window.
const NEGATION_SCALAR: f64 = -0.74;
/// How many preceding tokens can modify a sentiment word.
const MODIFIER_WINDOW: usize = 3;
/// Normalization constant for the compound score.
const ALPHA: f64 = 15.0;

/// Anything that can turn text into polarity scores.
///
/// Implementations must be deterministic and total: any string, including the
/// empty one, yields a valid score mapping.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

/// Rule-based, lexicon-driven scorer in the style of VADER.
#[derive(Debug, Clone, Default)]
pub struct VaderAnalyzer {
    lexicon: Lexicon,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::new())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn word_valences(&self, tokens: &[String]) -> Vec<f64> {
        let cap_diff = has_cap_differential(tokens);
        let mut valences = Vec::with_capacity(tokens.len());

        for (i, token) in tokens.iter().enumerate() {
            let lower = token.to_lowercase();
            let next_is_of = tokens
                .get(i + 1)
                .is_some_and(|next| next.eq_ignore_ascii_case("of"));

            if self.lexicon.booster(&lower).is_some() || (lower == "kind" && next_is_of) {
                valences.push(0.0);
                continue;
            }

            let Some(mut valence) = self.lexicon.valence(&lower) else {
                valences.push(0.0);
                continue;
            };

            if cap_diff && is_all_caps(token) {
                valence += CAPS_INCREMENT.copysign(valence);
            }

            for distance in 1..=MODIFIER_WINDOW.min(i) {
                let previous = &tokens[i - distance];
                if self.lexicon.valence(previous).is_none() {
                    let damping = match distance {
                        2 => 0.95,
                        3 => 0.9,
                        _ => 1.0,
                    };
                    valence += self.booster_shift(previous, valence, cap_diff) * damping;
                }
                if self.lexicon.is_negation(previous) {
                    valence *= NEGATION_SCALAR;
                }
            }

            valences.push(valence);
        }

        apply_but_contrast(tokens, &mut valences);
        valences
    }

    fn booster_shift(&self, word: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(delta) = self.lexicon.booster(word) else {
            return 0.0;
        };

        let mut shift = if valence < 0.0 { -delta } else { delta };
        if cap_diff && is_all_caps(word) {
            shift += CAPS_INCREMENT.copysign(valence);
        }
        shift
    }
}

impl SentimentScorer for VaderAnalyzer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return SentimentScores::neutral();
        }

        let valences = self.word_valences(&tokens);
        let emphasis = punctuation_emphasis(text);

        let sum: f64 = valences.iter().sum();
        let compound = if sum > 0.0 {
            normalize(sum + emphasis)
        } else if sum < 0.0 {
            normalize(sum - emphasis)
        } else {
            0.0
        };

        let mut pos_sum: f64 = 0.0;
        let mut neg_sum: f64 = 0.0;
        let mut neu_count: f64 = 0.0;
        for valence in &valences {
            if *valence > 0.0 {
                pos_sum += valence + 1.0;
            } else if *valence < 0.0 {
                neg_sum += valence - 1.0;
            } else {
                neu_count += 1.0;
            }
        }

        if pos_sum > neg_sum.abs() {
            pos_sum += emphasis;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= emphasis;
        }

        let total = pos_sum + neg_sum.abs() + neu_count;
        if total == 0.0 {
            return SentimentScores::neutral();
        }

        SentimentScores {
            neg: round_to(neg_sum.abs() / total, 3),
            neu: round_to(neu_count / total, 3),
            pos: round_to(pos_sum / total, 3),
            compound: round_to(compound, 4),
        }
    }
}

/// Words after "but" dominate the overall sentiment; words before it fade.
fn apply_but_contrast(tokens: &[String], valences: &mut [f64]) {
    let Some(pivot) = tokens.iter().position(|t| t.eq_ignore_ascii_case("but")) else {
        return;
    };

    for (i, valence) in valences.iter_mut().enumerate() {
        if i < pivot {
            *valence *= 0.5;
        } else if i > pivot {
            *valence *= 1.5;
        }
    }
}

/// True when some, but not all, tokens are shouted.
fn has_cap_differential(tokens: &[String]) -> bool {
    let shouted = tokens.iter().filter(|t| is_all_caps(t)).count();
    shouted > 0 && shouted < tokens.len()
}

fn is_all_caps(word: &str) -> bool {
    word.chars().filter(|c| c.is_alphabetic()).count() > 1
        && word
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| c.is_uppercase())
}

fn punctuation_emphasis(text: &str) -> f64 {
    let (bangs, questions) = punctuation_counts(text);
    let bang_amplifier = bangs.min(4) as f64 * 0.292;
    let question_amplifier = match questions {
        0 | 1 => 0.0,
        2..=3 => questions as f64 * 0.18,
        _ => 0.96,
    };
    bang_amplifier + question_amplifier
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
