//! # Sentiment classifier
//!
//! Text in, [`Label`](shub_kernel::domain::sentiment::Label) out:
//!
//! 1. [`normalizer`] keeps ASCII letters, lowercases and drops stopwords.
//! 2. [`vectorizer`] maps the normalized text to a sparse TF-IDF row.
//! 3. [`model`] scores the row with a frozen linear or naive Bayes model.
//! 4. [`predictor::LabelMap`] turns the class index into a label.
//!
//! Artifacts are loaded once ([`Classifier::load`]) and shared read-only afterwards.

pub mod artifact;
mod error;
pub mod model;
pub mod normalizer;
pub mod predictor;
pub mod stopwords;
pub mod vectorizer;

pub use crate::error::{ClassifierError, ClassifierErrorExt};
pub use crate::predictor::{Predict, Prediction, SentimentPredictor};
use shub_kernel::domain::config::ModelConfig;
use shub_kernel::domain::sentiment::Label;

/// Classifier feature state
#[shub_derive::shub_slice]
pub struct Classifier {
    pub predictor: SentimentPredictor,
}

impl Classifier {
    /// # Errors
    /// See [`SentimentPredictor::load`].
    pub fn load(config: &ModelConfig) -> Result<Self, ClassifierError> {
        let predictor = SentimentPredictor::load(config)?;
        Ok(Self::new(ClassifierInner { predictor }))
    }
}

impl Predict for Classifier {
    fn predict(&self, text: &str) -> Label {
        self.predictor.predict(text)
    }
}
