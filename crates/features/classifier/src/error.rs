use std::borrow::Cow;

/// A specialized [`ClassifierError`] enum of this crate.
#[shub_derive::shub_error]
pub enum ClassifierError {
    /// Artifact or stopword file could not be read.
    #[error("Classifier IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Classifier JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Classifier binary format error{}: {source}", format_context(.context))]
    Postcard { source: postcard::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid token pattern{}: {source}", format_context(.context))]
    Pattern { source: regex::Error, context: Option<Cow<'static, str>> },

    /// The artifact decoded but is not usable (dimensions, classes, n-gram range).
    #[error("Invalid artifact{}: {message}", format_context(.context))]
    Artifact { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The configured label map does not match the classifier's classes.
    #[error("Label map error{}: {message}", format_context(.context))]
    Labels { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
