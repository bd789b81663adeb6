//! Sentiment labels, per-item results and batch summaries.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

use crate::constants::{NEGATIVE_COLOR, POSITIVE_COLOR};

/// Binary sentiment verdict.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Label {
    Negative,
    Positive,
}

impl Label {
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }

    /// Card color used by the demonstration page.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_COLOR,
            Self::Negative => NEGATIVE_COLOR,
        }
    }
}

/// One classified text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub text: String,
    pub label: Label,
    /// Permalink of the post the text was taken from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ClassificationResult {
    #[must_use]
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        Self { text: text.into(), label, link: None }
    }

    #[must_use]
    pub fn with_link(mut self, link: Option<String>) -> Self {
        self.link = link;
        self
    }
}

/// Counts and percentages per label over a batch.
///
/// Percentages are in `0.0..=100.0` and both zero for an empty batch.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AggregateSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub positive_pct: f64,
    pub negative_pct: f64,
}

impl AggregateSummary {
    #[must_use]
    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = Label>,
    {
        let (positive, negative) = labels.into_iter().fold((0, 0), |(pos, neg), label| {
            if label.is_positive() { (pos + 1, neg) } else { (pos, neg + 1) }
        });
        let total = positive + negative;

        Self {
            total,
            positive,
            negative,
            positive_pct: percentage(positive, total),
            negative_pct: percentage(negative, total),
        }
    }

    #[must_use]
    pub fn from_results(results: &[ClassificationResult]) -> Self {
        Self::from_labels(results.iter().map(|r| r.label))
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { part as f64 / total as f64 * 100.0 }
}

/// Where the texts of a batch came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum BatchSource {
    Text,
    Demo,
    User { username: String },
}

/// Outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub id: String,
    pub source: BatchSource,
    pub results: Vec<ClassificationResult>,
    pub summary: AggregateSummary,
    /// Set when the batch differs from what was asked for (e.g. the demo fallback).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}
