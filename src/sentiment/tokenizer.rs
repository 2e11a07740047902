use regex::Regex;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z']*").expect("valid word regex"));

/// Splits text into scoring tokens.
///
/// Case is preserved (capitalization is a sentiment signal), trailing
/// apostrophes are dropped and single letters other than "I" are skipped.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('\'').to_string())
        .filter(|word| word.len() > 1 || word == "I")
        .collect()
}

/// Counts `!` and `?` marks, which amplify whatever polarity the text has.
pub fn punctuation_counts(text: &str) -> (usize, usize) {
    text.chars().fold((0, 0), |(bangs, questions), c| match c {
        '!' => (bangs + 1, questions),
        '?' => (bangs, questions + 1),
        _ => (bangs, questions),
    })
}
