//! English stopword list and file-backed replacements.

use crate::error::{ClassifierError, ClassifierErrorExt};
use fxhash::FxHashSet;
use std::fs;
use std::path::Path;

/// NLTK English stopwords.
const ENGLISH: [&str; 179] = [
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or", "because",
    "as", "until", "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down", "in",
    "out", "on", "off", "over", "under", "again", "further", "then", "once", "here", "there",
    "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
    "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
    "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d", "ll", "m", "o",
    "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn",
    "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
    "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn", "wouldn't",
];

/// Lowercase words dropped by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: FxHashSet<String>,
}

impl Stopwords {
    /// The built-in English list.
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(ENGLISH)
    }

    /// An empty set; nothing is dropped.
    #[must_use]
    pub fn none() -> Self {
        Self { words: FxHashSet::default() }
    }

    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Reads one word per line. Blank lines and lines starting with `#` are skipped.
    ///
    /// # Errors
    /// Returns [`ClassifierError::Io`] if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .context(format!("Reading stopwords from {}", path.display()))?;

        Ok(Self::from_words(raw.lines().filter(|line| !line.trim_start().starts_with('#'))))
    }

    /// `token` must already be lowercase.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list_is_complete() {
        let sw = Stopwords::english();
        assert_eq!(sw.len(), 179);
        for word in ["the", "not", "no", "don", "t", "wouldn't", "y"] {
            assert!(sw.contains(word), "{word} missing");
        }
        assert!(!sw.contains("love"));
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list\nFoo\n\n  bar  \n").unwrap();

        let sw = Stopwords::from_file(file.path()).unwrap();
        assert_eq!(sw.len(), 2);
        assert!(sw.contains("foo"));
        assert!(sw.contains("bar"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Stopwords::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
        assert!(err.to_string().contains("Reading stopwords"));
    }
}
