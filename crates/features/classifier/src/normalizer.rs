//! Lexical normalization applied before vectorization.

use crate::stopwords::Stopwords;

/// Replaces everything outside `[A-Za-z]` with spaces, lowercases, drops stopwords and
/// rejoins the remaining tokens with single spaces.
///
/// The output only contains `[a-z ]`, never starts or ends with a space and never contains a
/// token from `stopwords`.
#[must_use]
pub fn normalize(text: &str, stopwords: &Stopwords) -> String {
    let letters: String = text
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
        .collect();

    letters
        .split_whitespace()
        .filter(|token| !stopwords.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// [`normalize`] bound to a stopword set.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: Stopwords,
}

impl Normalizer {
    #[must_use]
    pub const fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }

    #[must_use]
    pub fn normalize(&self, text: &str) -> String {
        normalize(text, &self.stopwords)
    }

    #[must_use]
    pub const fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }
}
