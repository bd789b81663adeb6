use crate::constants::{DEFAULT_DEMO_COUNT, DEFAULT_FETCH_COUNT};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration shared by the server, the CLI and every feature slice.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub posts: PostsConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Locations of the pre-trained artifacts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub vectorizer: PathBuf,
    pub classifier: PathBuf,
    /// Replaces the built-in English stopword list when set. One word per line.
    pub stopwords: Option<PathBuf>,
    pub labels: LabelConfig,
}

/// Class index carried by each label in the classifier artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub negative: u32,
    pub positive: u32,
}

/// Post-fetch collaborator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Nitter base URLs, tried in order.
    pub instances: Vec<String>,
    pub timeout_seconds: u64,
    pub user_agent: String,
    /// Upper bound on timeline pages walked for a single request.
    pub max_pages: usize,
}

/// Default batch sizes used when a request does not name one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub demo_count: usize,
    pub fetch_count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Rolling log files are written here when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 4583, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            vectorizer: PathBuf::from("assets/model/vectorizer.json"),
            classifier: PathBuf::from("assets/model/classifier.json"),
            stopwords: None,
            labels: LabelConfig::default(),
        }
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self { negative: 0, positive: 1 }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            instances: vec![
                "https://nitter.net".to_owned(),
                "https://nitter.privacydev.net".to_owned(),
                "https://nitter.poast.org".to_owned(),
            ],
            timeout_seconds: 15,
            user_agent: concat!("sentiment-hub/", env!("CARGO_PKG_VERSION")).to_owned(),
            max_pages: 10,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { demo_count: DEFAULT_DEMO_COUNT, fetch_count: DEFAULT_FETCH_COUNT }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
