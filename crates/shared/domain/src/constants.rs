//! Shared literals and limits.

/// `OpenAPI` tag for operational endpoints.
pub const SYSTEM_TAG: &str = "System";
/// `OpenAPI` tag for sentiment analysis endpoints.
pub const ANALYSIS_TAG: &str = "Analysis";

/// Number of built-in demo posts.
pub const DEMO_POSTS: usize = 20;
/// Smallest demo batch a caller may request.
pub const MIN_DEMO_COUNT: usize = 5;
/// Largest demo batch a caller may request.
pub const MAX_DEMO_COUNT: usize = DEMO_POSTS;
pub const DEFAULT_DEMO_COUNT: usize = 10;

pub const MIN_FETCH_COUNT: usize = 10;
pub const MAX_FETCH_COUNT: usize = 100;
pub const DEFAULT_FETCH_COUNT: usize = 50;

/// Handle length limit of the upstream platform.
pub const MAX_USERNAME_LEN: usize = 15;

/// Card colors of the demonstration page.
pub const POSITIVE_COLOR: &str = "#28a745";
pub const NEGATIVE_COLOR: &str = "#dc3545";
