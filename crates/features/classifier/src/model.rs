//! Frozen binary decision functions.

use crate::error::ClassifierError;
use crate::vectorizer::FeatureVector;
use serde::{Deserialize, Serialize};

/// On-disk form of a fitted binary classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierArtifact {
    /// Class indices in the order the model scores them.
    pub classes: [u32; 2],
    pub model: ModelKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    /// Logistic regression, linear SVM and friends.
    Linear { coef: Vec<f64>, intercept: f64 },
    MultinomialNb { class_log_prior: [f64; 2], feature_log_prob: [Vec<f64>; 2] },
}

impl ClassifierArtifact {
    /// Number of feature columns the model expects.
    #[must_use]
    pub fn dimension(&self) -> usize {
        match &self.model {
            ModelKind::Linear { coef, .. } => coef.len(),
            ModelKind::MultinomialNb { feature_log_prob, .. } => feature_log_prob[0].len(),
        }
    }

    /// Checks the model against the vectorizer it will be paired with.
    ///
    /// # Errors
    /// Returns [`ClassifierError::Artifact`] on duplicate classes, ragged or non-finite weights,
    /// or a column count different from `dimension`.
    pub fn validate(&self, dimension: usize) -> Result<(), ClassifierError> {
        if self.classes[0] == self.classes[1] {
            return Err(invalid(format!("Classes must be distinct, got {:?}", self.classes)));
        }

        let weights: Vec<&[f64]> = match &self.model {
            ModelKind::Linear { coef, intercept } => {
                if !intercept.is_finite() {
                    return Err(invalid("Non-finite intercept"));
                }
                vec![coef.as_slice()]
            },
            ModelKind::MultinomialNb { class_log_prior, feature_log_prob } => {
                if class_log_prior.iter().any(|p| !p.is_finite()) {
                    return Err(invalid("Non-finite class prior"));
                }
                if feature_log_prob[0].len() != feature_log_prob[1].len() {
                    return Err(invalid("Ragged feature_log_prob rows"));
                }
                feature_log_prob.iter().map(Vec::as_slice).collect()
            },
        };

        if weights.iter().flat_map(|row| row.iter()).any(|w| !w.is_finite()) {
            return Err(invalid("Non-finite model weight"));
        }

        if self.dimension() != dimension {
            return Err(invalid(format!(
                "Model expects {} features but the vectorizer produces {dimension}",
                self.dimension()
            )));
        }

        Ok(())
    }

    /// Signed score; positive favors `classes[1]`.
    #[must_use]
    pub fn decision(&self, features: &FeatureVector) -> f64 {
        match &self.model {
            ModelKind::Linear { coef, intercept } => features.dot(coef) + intercept,
            ModelKind::MultinomialNb { class_log_prior, feature_log_prob } => {
                let first = class_log_prior[0] + features.dot(&feature_log_prob[0]);
                let second = class_log_prior[1] + features.dot(&feature_log_prob[1]);
                second - first
            },
        }
    }

    /// Class index for a feature row. Ties go to `classes[0]`.
    #[must_use]
    pub fn predict_class(&self, features: &FeatureVector) -> u32 {
        if self.decision(features) > 0.0 { self.classes[1] } else { self.classes[0] }
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> ClassifierError {
    ClassifierError::Artifact { message: message.into(), context: Some("Classifier".into()) }
}
