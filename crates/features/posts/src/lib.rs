//! Post-fetch slice.
//!
//! [`PostSource`] is the seam the analysis workflow depends on; [`NitterClient`] is the
//! production implementation. Tests plug in their own sources.

mod error;
pub mod nitter;
mod source;

pub use crate::error::{PostsError, PostsErrorExt};
pub use crate::nitter::NitterClient;
pub use crate::source::PostSource;
use serde::{Deserialize, Serialize};
use shub_kernel::domain::config::PostsConfig;
use std::sync::Arc;

/// A public post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    /// Permalink on the instance the post was read from.
    pub link: Option<String>,
}

impl Post {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), link: None }
    }
}

/// Posts feature state
#[shub_derive::shub_slice]
pub struct Posts {
    pub source: Arc<dyn PostSource>,
}

impl Posts {
    /// Production wiring: a [`NitterClient`] over the configured instances.
    ///
    /// # Errors
    /// See [`NitterClient::new`].
    pub fn nitter(config: &PostsConfig) -> Result<Self, PostsError> {
        let client = NitterClient::new(config)?;
        tracing::info!(instances = client.instances().len(), "Posts slice initialized");
        Ok(Self::from_source(client))
    }

    #[must_use]
    pub fn from_source(source: impl PostSource + 'static) -> Self {
        Self::new(PostsInner { source: Arc::new(source) })
    }
}
