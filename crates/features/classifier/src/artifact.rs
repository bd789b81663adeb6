//! Artifact files: JSON for `.json`, postcard binary for everything else.

use crate::error::{ClassifierError, ClassifierErrorExt};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Json,
    Postcard,
}

impl Encoding {
    /// Chooses the encoding from the file extension.
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Postcard,
        }
    }
}

/// Reads and decodes an artifact.
///
/// # Errors
/// [`ClassifierError::Io`] when the file cannot be read, [`ClassifierError::Json`] or
/// [`ClassifierError::Postcard`] when it does not decode into `T`.
pub fn load_artifact<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ClassifierError> {
    let path = path.as_ref();
    let ctx = || format!("{}", path.display());

    let bytes = fs::read(path).context(ctx())?;
    let encoding = Encoding::for_path(path);
    debug!(path = %path.display(), ?encoding, bytes = bytes.len(), "Decoding artifact");

    match encoding {
        Encoding::Json => serde_json::from_slice(&bytes).context(ctx()),
        Encoding::Postcard => postcard::from_bytes(&bytes).context(ctx()),
    }
}

/// Encodes and writes an artifact, e.g. to convert a JSON export into the compact binary form.
///
/// # Errors
/// Returns the encoding error or [`ClassifierError::Io`] when the file cannot be written.
pub fn save_artifact<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), ClassifierError> {
    let path = path.as_ref();
    let ctx = || format!("{}", path.display());

    let bytes = match Encoding::for_path(path) {
        Encoding::Json => serde_json::to_vec_pretty(value).context(ctx())?,
        Encoding::Postcard => postcard::to_stdvec(value).context(ctx())?,
    };

    fs::write(path, bytes).context(ctx())
}
