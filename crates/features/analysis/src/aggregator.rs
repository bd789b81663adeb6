//! Applies a predictor across an ordered batch.

use shub_classifier::Predict;
use shub_kernel::domain::sentiment::{AggregateSummary, ClassificationResult};
use shub_posts::Post;

/// Per-item results in input order plus their summary.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub results: Vec<ClassificationResult>,
    pub summary: AggregateSummary,
}

impl Batch {
    fn from_results(results: Vec<ClassificationResult>) -> Self {
        let summary = AggregateSummary::from_results(&results);
        Self { results, summary }
    }
}

/// Classifies every text. An empty batch yields zero counts and zero percentages.
pub fn aggregate<P, I, S>(texts: I, predictor: &P) -> Batch
where
    P: Predict + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Batch::from_results(
        texts
            .into_iter()
            .map(|text| {
                let text = text.into();
                let label = predictor.predict(&text);
                ClassificationResult::new(text, label)
            })
            .collect(),
    )
}

/// Like [`aggregate`], keeping each post's permalink.
pub fn aggregate_posts<P>(posts: Vec<Post>, predictor: &P) -> Batch
where
    P: Predict + ?Sized,
{
    Batch::from_results(
        posts
            .into_iter()
            .map(|Post { text, link }| {
                let label = predictor.predict(&text);
                ClassificationResult::new(text, label).with_link(link)
            })
            .collect(),
    )
}
