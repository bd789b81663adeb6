use shub_kernel::security::username::GuardError;
use std::borrow::Cow;

/// A specialized [`PostsError`] enum of this crate.
#[shub_derive::shub_error]
pub enum PostsError {
    /// The username was rejected before any request was made.
    #[error("{source}{}", format_context(.context))]
    Guard { source: GuardError, context: Option<Cow<'static, str>> },

    /// The instance knows no such user.
    #[error("User not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No configured instance produced a usable answer.
    #[error("Post service unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("HTTP error{}: {source}", format_context(.context))]
    Http { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Posts config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl PostsError {
    /// Input errors are the caller's fault; everything else is the collaborator's.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::Guard { .. })
    }
}
