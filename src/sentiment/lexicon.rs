//! Sentiment Lexicon
//!
//! Valences follow the VADER convention: a mean human rating on a
//! `[-4, 4]` scale, where 0 is neutral.

use std::collections::{HashMap, HashSet};

/// Added to (or subtracted from) a valence by a booster word.
pub const BOOST_INCREMENT: f64 = 0.293;
/// Subtracted from (or added to) a valence by a dampener word.
pub const DAMP_DECREMENT: f64 = -0.293;

const WORD_VALENCES: &[(&str, f64)] = &[
    // positive
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("charming", 2.8),
    ("cheerful", 2.5),
    ("clean", 1.7),
    ("comfortable", 2.3),
    ("comfy", 1.8),
    ("convenient", 1.5),
    ("cool", 1.3),
    ("cozy", 1.9),
    ("delicious", 2.7),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("excellent", 2.7),
    ("exceptional", 2.6),
    ("fabulous", 2.4),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("fine", 0.8),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("glad", 2.0),
    ("good", 1.9),
    ("gorgeous", 3.0),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("impressive", 2.3),
    ("like", 1.5),
    ("liked", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasant", 2.3),
    ("pleased", 1.9),
    ("polite", 1.8),
    ("quiet", 0.9),
    ("recommend", 1.5),
    ("recommended", 1.9),
    ("relaxing", 2.2),
    ("safe", 1.9),
    ("satisfied", 1.8),
    ("spacious", 1.3),
    ("stunning", 2.6),
    ("super", 2.9),
    ("superb", 3.1),
    ("tasty", 2.1),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("top", 0.8),
    ("welcoming", 2.1),
    ("win", 2.8),
    ("wonderful", 2.7),
    ("worth", 0.9),
    ("wow", 2.8),
    // negative
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("boring", -1.3),
    ("broken", -2.1),
    ("cold", -0.3),
    ("complain", -1.8),
    ("crowded", -1.2),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("expensive", -0.6),
    ("fail", -2.5),
    ("failed", -2.3),
    ("filthy", -2.4),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("lousy", -2.5),
    ("mediocre", -1.0),
    ("mess", -1.5),
    ("nasty", -2.6),
    ("noisy", -0.7),
    ("overpriced", -1.3),
    ("pathetic", -2.2),
    ("poor", -2.1),
    ("problem", -1.7),
    ("rude", -2.0),
    ("sad", -2.1),
    ("scam", -2.6),
    ("slow", -0.8),
    ("smelly", -1.4),
    ("stupid", -2.4),
    ("terrible", -2.1),
    ("ugly", -2.3),
    ("unfriendly", -1.5),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("waste", -1.8),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOST_INCREMENT),
    ("completely", BOOST_INCREMENT),
    ("deeply", BOOST_INCREMENT),
    ("especially", BOOST_INCREMENT),
    ("extremely", BOOST_INCREMENT),
    ("highly", BOOST_INCREMENT),
    ("incredibly", BOOST_INCREMENT),
    ("really", BOOST_INCREMENT),
    ("so", BOOST_INCREMENT),
    ("such", BOOST_INCREMENT),
    ("too", BOOST_INCREMENT),
    ("totally", BOOST_INCREMENT),
    ("truly", BOOST_INCREMENT),
    ("very", BOOST_INCREMENT),
    ("almost", DAMP_DECREMENT),
    ("barely", DAMP_DECREMENT),
    ("fairly", DAMP_DECREMENT),
    ("hardly", DAMP_DECREMENT),
    ("kinda", DAMP_DECREMENT),
    ("little", DAMP_DECREMENT),
    ("partly", DAMP_DECREMENT),
    ("slightly", DAMP_DECREMENT),
    ("somewhat", DAMP_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "aint", "aren't", "arent", "can't", "cannot", "cant", "couldn't", "couldnt", "didn't",
    "didnt", "doesn't", "doesnt", "don't", "dont", "hadn't", "hasn't", "haven't", "isn't",
    "isnt", "neither", "never", "no", "nobody", "none", "nope", "nor", "not", "nothing",
    "nowhere", "shouldn't", "wasn't", "wasnt", "weren't", "without", "won't", "wont",
    "wouldn't", "wouldnt",
];

/// Word valences, booster words and negations used by the analyzer.
///
/// All lookups are case-insensitive.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Builds the built-in English review lexicon.
    pub fn new() -> Self {
        Self {
            valences: WORD_VALENCES
                .iter()
                .map(|(word, valence)| (word.to_string(), *valence))
                .collect(),
            boosters: BOOSTERS
                .iter()
                .map(|(word, delta)| (word.to_string(), *delta))
                .collect(),
            negations: NEGATIONS.iter().map(|word| word.to_string()).collect(),
        }
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    pub fn booster(&self, word: &str) -> Option<f64> {
        self.boosters.get(&word.to_lowercase()).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.negations.contains(&lower) || lower.ends_with("n't")
    }

    /// Adds or overrides the valence of a word.
    pub fn insert_valence(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
