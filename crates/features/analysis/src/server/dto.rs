use shub_derive::api_model;

#[api_model]
/// Classify a single text.
pub struct TextRequest {
    /// Free-form text to classify
    pub text: String,
}

#[api_model]
#[derive(Default)]
/// Classify the built-in demo posts.
pub struct DemoRequest {
    /// Number of demo posts (5-20); the configured default when omitted
    #[serde(default)]
    pub count: Option<usize>,
}

#[api_model]
/// Fetch and classify a user's posts.
pub struct UserRequest {
    /// Handle, with or without a leading `@`
    pub username: String,
    /// Number of posts to fetch (10-100); the configured default when omitted
    #[serde(default)]
    pub count: Option<usize>,
    /// Answer with the demo batch instead of an error when fetching fails
    #[serde(default)]
    pub fallback: bool,
}

#[api_model]
/// Error payload of every analysis endpoint.
pub struct ErrorBody {
    /// Machine-readable kind: `validation`, `not_found`, `upstream` or `internal`
    pub error: String,
    pub message: String,
    /// What the caller can try next
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
