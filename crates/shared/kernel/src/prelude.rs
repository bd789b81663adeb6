//! Common imports for feature slices.

pub use crate::domain::config::ApiConfig;
pub use crate::domain::constants::*;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};
pub use crate::domain::sentiment::{
    AggregateSummary, AnalysisReport, BatchSource, ClassificationResult, Label,
};
pub use crate::safe_nanoid;
pub use crate::security::username::{GuardError, UsernameGuard};
#[cfg(feature = "server")]
pub use crate::server::ApiState;
