//! Normalizer, vectorizer and model chained into a label.

use crate::artifact::load_artifact;
use crate::error::ClassifierError;
use crate::model::ClassifierArtifact;
use crate::normalizer::Normalizer;
use crate::stopwords::Stopwords;
use crate::vectorizer::{TfidfArtifact, TfidfVectorizer};
use shub_kernel::domain::config::{LabelConfig, ModelConfig};
use shub_kernel::domain::sentiment::Label;
use std::sync::Arc;
use tracing::{info, trace};

/// Anything that turns a text into a sentiment label.
///
/// Implementations are deterministic and never fail; artifact problems surface when the
/// predictor is built.
pub trait Predict: Send + Sync {
    fn predict(&self, text: &str) -> Label;
}

impl<P: Predict + ?Sized> Predict for &P {
    fn predict(&self, text: &str) -> Label {
        (**self).predict(text)
    }
}

impl<P: Predict + ?Sized> Predict for Arc<P> {
    fn predict(&self, text: &str) -> Label {
        (**self).predict(text)
    }
}

/// Class index to label mapping, checked against the classifier's classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMap {
    negative: u32,
    positive: u32,
}

impl LabelMap {
    /// # Errors
    /// Returns [`ClassifierError::Labels`] when the configured indices are equal or are not
    /// exactly the classes the model was trained on.
    pub fn new(config: LabelConfig, classes: [u32; 2]) -> Result<Self, ClassifierError> {
        let LabelConfig { negative, positive } = config;

        if negative == positive {
            return Err(ClassifierError::Labels {
                message: format!("negative and positive both map to class {negative}").into(),
                context: None,
            });
        }

        for class in [negative, positive] {
            if !classes.contains(&class) {
                return Err(ClassifierError::Labels {
                    message: format!("class {class} is not one of the model classes {classes:?}")
                        .into(),
                    context: None,
                });
            }
        }

        Ok(Self { negative, positive })
    }

    #[must_use]
    pub const fn label(&self, class: u32) -> Label {
        if class == self.positive { Label::Positive } else { Label::Negative }
    }

    #[must_use]
    pub const fn class(&self, label: Label) -> u32 {
        match label {
            Label::Positive => self.positive,
            Label::Negative => self.negative,
        }
    }
}

/// Intermediate values of one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub normalized: String,
    /// Signed model score; positive favors the model's second class.
    pub decision: f64,
    pub class: u32,
    pub label: Label,
}

#[derive(Debug, Clone)]
pub struct SentimentPredictor {
    normalizer: Normalizer,
    vectorizer: TfidfVectorizer,
    model: ClassifierArtifact,
    labels: LabelMap,
}

impl SentimentPredictor {
    /// Pairs already decoded artifacts.
    ///
    /// # Errors
    /// Returns [`ClassifierError::Artifact`] when the model does not fit the vectorizer and
    /// [`ClassifierError::Labels`] when the label map does not fit the model.
    pub fn new(
        normalizer: Normalizer,
        vectorizer: TfidfVectorizer,
        model: ClassifierArtifact,
        labels: LabelConfig,
    ) -> Result<Self, ClassifierError> {
        model.validate(vectorizer.dimension())?;
        let labels = LabelMap::new(labels, model.classes)?;

        Ok(Self { normalizer, vectorizer, model, labels })
    }

    /// Loads stopwords, vectorizer and classifier from the configured paths.
    ///
    /// # Errors
    /// Any read, decode or validation failure. All of them are fatal at start-up.
    pub fn load(config: &ModelConfig) -> Result<Self, ClassifierError> {
        let stopwords = match &config.stopwords {
            Some(path) => Stopwords::from_file(path)?,
            None => Stopwords::english(),
        };

        let vectorizer: TfidfArtifact = load_artifact(&config.vectorizer)?;
        let vectorizer = TfidfVectorizer::try_from(vectorizer)?;
        let model: ClassifierArtifact = load_artifact(&config.classifier)?;

        let predictor = Self::new(Normalizer::new(stopwords), vectorizer, model, config.labels)?;
        info!(
            vectorizer = %config.vectorizer.display(),
            classifier = %config.classifier.display(),
            features = predictor.dimension(),
            vocabulary = predictor.vectorizer.vocabulary_len(),
            stopwords = predictor.normalizer.stopwords().len(),
            "Sentiment model loaded"
        );

        Ok(predictor)
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    #[must_use]
    pub const fn labels(&self) -> LabelMap {
        self.labels
    }

    /// Runs the full chain and keeps every intermediate value.
    #[must_use]
    pub fn explain(&self, text: &str) -> Prediction {
        let normalized = self.normalizer.normalize(text);
        let features = self.vectorizer.transform(&normalized);
        let decision = self.model.decision(&features);
        let class = self.model.predict_class(&features);
        let label = self.labels.label(class);

        trace!(%normalized, decision, class, %label, "Prediction");
        Prediction { normalized, decision, class, label }
    }
}

impl Predict for SentimentPredictor {
    fn predict(&self, text: &str) -> Label {
        self.explain(text).label
    }
}
