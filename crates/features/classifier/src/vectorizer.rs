//! Frozen TF-IDF transformer.
//!
//! Mirrors the scikit-learn `TfidfVectorizer` transform: regex tokenization, word n-grams,
//! raw or sublinear term frequency scaled by the stored idf weights, then row normalization.

use crate::error::{ClassifierError, ClassifierErrorExt};
use fxhash::FxHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalization applied after idf weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    #[default]
    L2,
    None,
}

/// On-disk form of a fitted vectorizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfArtifact {
    /// Term (or space-joined n-gram) to column index.
    pub vocabulary: BTreeMap<String, usize>,
    /// Inverse document frequency per column.
    pub idf: Vec<f64>,
    pub ngram_range: (usize, usize),
    pub norm: Norm,
    pub sublinear_tf: bool,
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_owned()
}

/// Sparse row produced by [`TfidfVectorizer::transform`].
///
/// Entries are sorted by column and never hold zeros.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// True when no vocabulary term was found.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense weight row of the same dimension.
    #[must_use]
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries.iter().map(|&(col, value)| weights.get(col).map_or(0.0, |w| w * value)).sum()
    }

    #[must_use]
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dimension];
        for &(col, value) in &self.entries {
            dense[col] = value;
        }
        dense
    }
}

/// A validated, ready-to-use vectorizer.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: FxHashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    norm: Norm,
    sublinear_tf: bool,
    lowercase: bool,
    token_pattern: Regex,
}

impl TryFrom<TfidfArtifact> for TfidfVectorizer {
    type Error = ClassifierError;

    fn try_from(artifact: TfidfArtifact) -> Result<Self, Self::Error> {
        let TfidfArtifact {
            vocabulary,
            idf,
            ngram_range,
            norm,
            sublinear_tf,
            lowercase,
            token_pattern,
        } = artifact;

        if idf.is_empty() {
            return Err(invalid("Vectorizer has an empty idf table"));
        }
        if let Some(col) = idf.iter().position(|w| !w.is_finite()) {
            return Err(invalid(format!("Non-finite idf weight at column {col}")));
        }

        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(format!("Malformed ngram_range ({min_n}, {max_n})")));
        }

        let mut seen = vec![false; idf.len()];
        for (term, &col) in &vocabulary {
            match seen.get_mut(col) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => return Err(invalid(format!("Column {col} is assigned twice ('{term}')"))),
                None => {
                    return Err(invalid(format!(
                        "Term '{term}' maps to column {col} outside the idf table ({})",
                        idf.len()
                    )));
                },
            }
        }

        let token_pattern = Regex::new(&token_pattern).context("Vectorizer token pattern")?;

        Ok(Self {
            vocabulary: vocabulary.into_iter().collect(),
            idf,
            ngram_range,
            norm,
            sublinear_tf,
            lowercase,
            token_pattern,
        })
    }
}

impl TfidfVectorizer {
    /// Number of columns of every produced [`FeatureVector`].
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Number of known terms. Can be below [`Self::dimension`] when columns were pruned.
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vectorizes one document.
    #[must_use]
    pub fn transform(&self, text: &str) -> FeatureVector {
        let counts = self.term_counts(text);

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, count)| {
                let count = f64::from(count);
                let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
                (col, tf * self.idf[col])
            })
            .filter(|&(_, value)| value != 0.0)
            .collect();

        let scale = match self.norm {
            Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if scale > 0.0 {
            entries.iter_mut().for_each(|(_, v)| *v /= scale);
        }

        FeatureVector { dimension: self.dimension(), entries }
    }

    /// Column counts of every in-vocabulary n-gram, ordered by column.
    fn term_counts(&self, text: &str) -> BTreeMap<usize, u32> {
        let text = if self.lowercase { text.to_lowercase() } else { text.to_owned() };
        let tokens: Vec<&str> = self.token_pattern.find_iter(&text).map(|m| m.as_str()).collect();

        let mut counts = BTreeMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&col) = self.vocabulary.get(&gram) {
                    *counts.entry(col).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> ClassifierError {
    ClassifierError::Artifact { message: message.into(), context: Some("Vectorizer".into()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> TfidfArtifact {
        TfidfArtifact {
            vocabulary: [("good", 0), ("bad", 1), ("not good", 2), ("movie", 3)]
                .into_iter()
                .map(|(t, c)| (t.to_owned(), c))
                .collect(),
            idf: vec![1.0, 2.0, 3.0, 1.5],
            ngram_range: (1, 2),
            norm: Norm::None,
            sublinear_tf: false,
            lowercase: true,
            token_pattern: DEFAULT_TOKEN_PATTERN.to_owned(),
        }
    }

    #[test]
    fn test_counts_unigrams_and_bigrams() {
        let vectorizer = TfidfVectorizer::try_from(artifact()).unwrap();
        let row = vectorizer.transform("Not good, not GOOD movie");

        assert_eq!(row.dimension(), 4);
        assert_eq!(row.entries(), &[(0, 2.0), (2, 6.0), (3, 1.5)]);
    }

    #[test]
    fn test_pruned_columns_stay_in_the_dimension() {
        let mut raw = artifact();
        raw.vocabulary.retain(|term, _| term != "not good");
        let vectorizer = TfidfVectorizer::try_from(raw).unwrap();

        assert_eq!(vectorizer.vocabulary_len(), 3);
        assert_eq!(vectorizer.dimension(), 4);
        assert!(vectorizer.transform("not good").entries().iter().all(|&(col, _)| col != 2));
    }

    #[test]
    fn test_l2_rows_have_unit_length() {
        let mut raw = artifact();
        raw.norm = Norm::L2;
        let vectorizer = TfidfVectorizer::try_from(raw).unwrap();

        let row = vectorizer.transform("good bad bad");
        let length: f64 = row.entries().iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        assert!((length - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sublinear_and_l1() {
        let mut raw = artifact();
        raw.sublinear_tf = true;
        raw.norm = Norm::L1;
        let vectorizer = TfidfVectorizer::try_from(raw).unwrap();

        let row = vectorizer.transform("bad bad bad good");
        let expected_bad = (1.0 + 3f64.ln()) * 2.0;
        let total = expected_bad + 1.0;
        assert!((row.to_dense()[1] - expected_bad / total).abs() < 1e-12);
        assert!((row.entries().iter().map(|(_, v)| v).sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_and_empty_text_give_zero_rows() {
        let vectorizer = TfidfVectorizer::try_from(artifact()).unwrap();
        assert!(vectorizer.transform("").is_zero());
        assert!(vectorizer.transform("a b c unknown").is_zero());
        assert!(vectorizer.transform("x").dot(&[1.0; 4]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_malformed_artifacts() {
        let mut raw = artifact();
        raw.vocabulary.insert("ugly".to_owned(), 9);
        assert!(matches!(TfidfVectorizer::try_from(raw), Err(ClassifierError::Artifact { .. })));

        let mut raw = artifact();
        raw.vocabulary.insert("dup".to_owned(), 0);
        assert!(TfidfVectorizer::try_from(raw).is_err());

        let mut raw = artifact();
        raw.ngram_range = (2, 1);
        assert!(TfidfVectorizer::try_from(raw).is_err());

        let mut raw = artifact();
        raw.token_pattern = "(".to_owned();
        assert!(matches!(TfidfVectorizer::try_from(raw), Err(ClassifierError::Pattern { .. })));
    }
}
