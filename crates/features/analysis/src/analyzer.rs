//! The three analysis workflows: free text, demo batch and a user's posts.

use crate::aggregator::{Batch, aggregate, aggregate_posts};
use crate::demo::demo_posts;
use crate::error::{AnalysisError, ErrorKind};
use shub_classifier::Classifier;
use shub_kernel::domain::config::AnalysisConfig;
use shub_kernel::domain::constants::{
    MAX_DEMO_COUNT, MAX_FETCH_COUNT, MIN_DEMO_COUNT, MIN_FETCH_COUNT,
};
use shub_kernel::domain::sentiment::{AnalysisReport, BatchSource};
use shub_kernel::safe_nanoid;
use shub_kernel::security::username::UsernameGuard;
use shub_posts::Posts;
use std::ops::RangeInclusive;
use tracing::{info, warn};

const DEMO_RANGE: RangeInclusive<usize> = MIN_DEMO_COUNT..=MAX_DEMO_COUNT;
const FETCH_RANGE: RangeInclusive<usize> = MIN_FETCH_COUNT..=MAX_FETCH_COUNT;

/// Ties the classifier, the post source and the default batch sizes together.
#[derive(Debug, Clone)]
pub struct Analyzer {
    classifier: Classifier,
    posts: Posts,
    defaults: AnalysisConfig,
}

impl Analyzer {
    #[must_use]
    pub const fn new(classifier: Classifier, posts: Posts, defaults: AnalysisConfig) -> Self {
        Self { classifier, posts, defaults }
    }

    /// Synchronous core shared by every surface.
    pub fn analyze<I, S>(&self, texts: I) -> Batch
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        aggregate(texts, &self.classifier)
    }

    /// A batch of one. Empty or whitespace-only text is classified like any other.
    #[must_use]
    pub fn analyze_text(&self, text: &str) -> AnalysisReport {
        report(BatchSource::Text, self.analyze([text]), None)
    }

    /// The first `count` demo posts; `None` uses the configured default.
    ///
    /// # Errors
    /// [`AnalysisError::Validation`] when `count` is outside `5..=20`.
    pub fn analyze_demo(&self, count: Option<usize>) -> Result<AnalysisReport, AnalysisError> {
        let count = checked_count(count.unwrap_or(self.defaults.demo_count), &DEMO_RANGE, "Demo")?;
        Ok(self.demo_report(count, None))
    }

    /// Fetches and classifies a user's posts in fetch order.
    ///
    /// With `fallback`, collaborator failures and empty timelines are answered with the
    /// default demo batch and a notice instead of an error. Input errors are never masked.
    ///
    /// # Errors
    /// [`AnalysisError::Guard`] / [`AnalysisError::Validation`] for bad input,
    /// [`AnalysisError::Posts`] when fetching fails and [`AnalysisError::NoResults`] when
    /// the user has no posts.
    pub async fn analyze_user(
        &self,
        username: &str,
        count: Option<usize>,
        fallback: bool,
    ) -> Result<AnalysisReport, AnalysisError> {
        let username = UsernameGuard::normalize(username)?;
        let count =
            checked_count(count.unwrap_or(self.defaults.fetch_count), &FETCH_RANGE, "Fetch")?;

        let outcome = match self.posts.source.fetch(&username, count).await {
            Ok(posts) if posts.is_empty() => Err(AnalysisError::NoResults {
                message: format!("No posts found for @{username}").into(),
                context: None,
            }),
            Ok(posts) => Ok(posts),
            Err(err) => Err(AnalysisError::from(err)),
        };

        match outcome {
            Ok(posts) => {
                info!(%username, posts = posts.len(), "Analyzing fetched posts");
                let batch = aggregate_posts(posts, &self.classifier);
                Ok(report(BatchSource::User { username }, batch, None))
            },
            Err(err) if fallback && err.kind() != ErrorKind::Input => {
                warn!(%username, error = %err, "Falling back to the demo batch");
                let count = self.defaults.demo_count.clamp(MIN_DEMO_COUNT, MAX_DEMO_COUNT);
                let notice = format!("{err}. Showing the demo batch instead.");
                Ok(self.demo_report(count, Some(notice)))
            },
            Err(err) => Err(err),
        }
    }

    fn demo_report(&self, count: usize, notice: Option<String>) -> AnalysisReport {
        report(BatchSource::Demo, self.analyze(demo_posts(count).iter().copied()), notice)
    }
}

fn checked_count(
    count: usize,
    range: &RangeInclusive<usize>,
    what: &'static str,
) -> Result<usize, AnalysisError> {
    if range.contains(&count) {
        Ok(count)
    } else {
        Err(AnalysisError::Validation {
            message: format!(
                "count must be between {} and {}, got {count}",
                range.start(),
                range.end()
            )
            .into(),
            context: Some(what.into()),
        })
    }
}

fn report(source: BatchSource, batch: Batch, notice: Option<String>) -> AnalysisReport {
    let Batch { results, summary } = batch;
    AnalysisReport { id: safe_nanoid!(), source, results, summary, notice }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_bounds() {
        assert_eq!(checked_count(5, &DEMO_RANGE, "Demo").unwrap(), 5);
        assert_eq!(checked_count(20, &DEMO_RANGE, "Demo").unwrap(), 20);
        assert!(checked_count(4, &DEMO_RANGE, "Demo").is_err());
        assert!(checked_count(101, &FETCH_RANGE, "Fetch").is_err());

        let err = checked_count(0, &FETCH_RANGE, "Fetch").unwrap_err();
        assert_eq!(err.to_string(), "Validation error (Fetch): count must be between 10 and 100, got 0");
    }
}
