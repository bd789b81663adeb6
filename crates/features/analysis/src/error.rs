use shub_kernel::security::username::GuardError;
use shub_posts::PostsError;
use std::borrow::Cow;

/// A specialized [`AnalysisError`] enum of this crate.
#[shub_derive::shub_error]
pub enum AnalysisError {
    /// Bad request parameters (count out of range, empty text).
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("{source}{}", format_context(.context))]
    Guard { source: GuardError, context: Option<Cow<'static, str>> },

    /// The post source failed.
    #[error("Fetching posts failed{}: {source}", format_context(.context))]
    Posts { source: PostsError, context: Option<Cow<'static, str>> },

    /// The post source answered, but with nothing to analyze.
    #[error("No results{}: {message}", format_context(.context))]
    NoResults { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Coarse classification used by the presentation layers (HTTP status, exit code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    NotFound,
    Upstream,
}

impl AnalysisError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } | Self::Guard { .. } => ErrorKind::Input,
            Self::Posts { source, .. } => match source {
                PostsError::Guard { .. } => ErrorKind::Input,
                PostsError::NotFound { .. } => ErrorKind::NotFound,
                _ => ErrorKind::Upstream,
            },
            Self::NoResults { .. } => ErrorKind::NotFound,
        }
    }

    /// Guidance shown next to collaborator errors.
    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Validation { .. } | Self::Guard { .. } => None,
            Self::NoResults { .. } => Some(
                "Check that the username is correct and the account has public posts, \
                 or try demo mode to see the analysis on sample posts.",
            ),
            Self::Posts { source, .. } => match source {
                PostsError::Guard { .. } => None,
                PostsError::NotFound { .. } => {
                    Some("Check the username, or try demo mode to see the analysis on sample posts.")
                },
                _ => Some(
                    "Nitter instances are often unreliable. Check your network, try again later, \
                     or enable demo mode to see the analysis on sample posts.",
                ),
            },
        }
    }
}
