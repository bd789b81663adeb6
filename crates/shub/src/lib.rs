//! Facade crate for the Sentiment Hub slices and shared modules.
//! Re-exports domain/kernel primitives and wires the slices together from an [`ApiConfig`].
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - The CLI calls [`build_analysis`] and drives the returned slice directly.
//! - The server calls [`init`] (feature `server`) and registers every slice in its state.

use shub_domain::config::ApiConfig;
use std::borrow::Cow;
use tracing::info;

pub use shub_domain as domain;
pub use shub_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use shub_analysis::server::analysis_router;
        pub use shub_kernel::server::router::system_router;
    }
    pub use shub_kernel::server::{ApiState, ApiStateBuilder, ApiStateError};
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use shub_analysis as analysis;
    pub use shub_classifier as classifier;
    pub use shub_posts as posts;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "classifier",
        "posts",
        "analysis",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

use features::analysis::{Analysis, AnalysisInner, Analyzer};
use features::classifier::{Classifier, ClassifierError};
use features::posts::{Posts, PostsError};

/// Startup failures of the slices.
#[shub_derive::shub_error]
pub enum InitError {
    #[error("Classifier initialization failed{}: {source}", format_context(.context))]
    Classifier { source: ClassifierError, context: Option<Cow<'static, str>> },

    #[error("Posts initialization failed{}: {source}", format_context(.context))]
    Posts { source: PostsError, context: Option<Cow<'static, str>> },
}

/// The three slices built from one configuration.
#[derive(Debug, Clone)]
pub struct Slices {
    pub classifier: Classifier,
    pub posts: Posts,
    pub analysis: Analysis,
}

/// Loads the model artifacts and builds the post source.
///
/// # Errors
/// [`InitError::Classifier`] when an artifact is missing or malformed and
/// [`InitError::Posts`] when the instance list is unusable.
pub fn build(config: &ApiConfig) -> Result<Slices, InitError> {
    let classifier = Classifier::load(&config.model).context("model")?;
    let posts = Posts::nitter(&config.posts).context("posts")?;
    let analyzer = Analyzer::new(classifier.clone(), posts.clone(), config.analysis.clone());
    let analysis = Analysis::new(AnalysisInner { analyzer });

    info!(enabled = ?features::ENABLED, "Feature slices ready");
    Ok(Slices { classifier, posts, analysis })
}

/// [`build`] for callers that only need the analysis workflows.
///
/// # Errors
/// See [`build`].
pub fn build_analysis(config: &ApiConfig) -> Result<Analysis, InitError> {
    build(config).map(|slices| slices.analysis)
}

/// Initialize all slices for server mode.
///
/// # Errors
/// See [`build`].
#[cfg(feature = "server")]
pub fn init(config: &ApiConfig) -> Result<Vec<domain::registry::InitializedSlice>, InitError> {
    use domain::registry::InitializedSlice;

    let Slices { classifier, posts, analysis } = build(config)?;
    Ok(vec![
        InitializedSlice::new(classifier),
        InitializedSlice::new(posts),
        InitializedSlice::new(analysis),
    ])
}
