//! [`PostSource`] backed by public Nitter instances.

mod html;

use crate::error::{PostsError, PostsErrorExt};
use crate::source::PostSource;
use crate::Post;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shub_kernel::domain::config::PostsConfig;
use shub_kernel::security::username::UsernameGuard;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Scrapes user timelines, walking the configured instances in order.
#[derive(Debug, Clone)]
pub struct NitterClient {
    http: Client,
    instances: Vec<String>,
    max_pages: usize,
}

impl NitterClient {
    /// # Errors
    /// [`PostsError::Config`] for an empty instance list or a non-HTTP base URL,
    /// [`PostsError::Http`] when the HTTP client cannot be built.
    pub fn new(config: &PostsConfig) -> Result<Self, PostsError> {
        if config.instances.is_empty() {
            return Err(PostsError::Config {
                message: "At least one Nitter instance is required".into(),
                context: None,
            });
        }

        if let Some(bad) = config
            .instances
            .iter()
            .find(|url| !(url.starts_with("http://") || url.starts_with("https://")))
        {
            return Err(PostsError::Config {
                message: format!("'{bad}' is not an http(s) URL").into(),
                context: Some("posts.instances".into()),
            });
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.max(1)))
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Building HTTP client")?;

        Ok(Self {
            http,
            instances: config
                .instances
                .iter()
                .map(|url| url.trim_end_matches('/').to_owned())
                .collect(),
            max_pages: config.max_pages.max(1),
        })
    }

    #[must_use]
    pub fn instances(&self) -> &[String] {
        &self.instances
    }

    async fn fetch_from(
        &self,
        base: &str,
        username: &str,
        count: usize,
    ) -> Result<Vec<Post>, PostsError> {
        let mut posts = Vec::new();
        let mut cursor: Option<String> = None;

        for page_no in 0..self.max_pages {
            let url = format!("{base}/{username}{}", cursor.as_deref().unwrap_or_default());
            debug!(%url, page_no, "Fetching timeline page");

            let response = self.http.get(&url).send().await.context(base.to_owned())?;
            match response.status() {
                StatusCode::NOT_FOUND => {
                    return Err(PostsError::NotFound {
                        message: format!("@{username}").into(),
                        context: Some(base.to_owned().into()),
                    });
                },
                status if !status.is_success() => {
                    return Err(PostsError::Unavailable {
                        message: format!("{base} answered {status}").into(),
                        context: None,
                    });
                },
                _ => {},
            }

            let body = response.text().await.context(base.to_owned())?;
            let page = html::parse_timeline(&body, base);

            if let Some(error) = page.error {
                let context = Some(base.to_owned().into());
                return Err(if error.to_ascii_lowercase().contains("not found") {
                    PostsError::NotFound { message: error.into(), context }
                } else {
                    PostsError::Unavailable { message: error.into(), context }
                });
            }

            if page.posts.is_empty() {
                break;
            }
            posts.extend(page.posts);
            if posts.len() >= count {
                break;
            }

            match page.cursor {
                Some(next) if cursor.as_ref() != Some(&next) => cursor = Some(next),
                _ => break,
            }
        }

        posts.truncate(count);
        Ok(posts)
    }
}

#[async_trait]
impl PostSource for NitterClient {
    async fn fetch(&self, username: &str, count: usize) -> Result<Vec<Post>, PostsError> {
        let username = UsernameGuard::normalize(username)?;
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut failures = Vec::new();
        for base in &self.instances {
            match self.fetch_from(base, &username, count).await {
                Ok(posts) => {
                    info!(instance = %base, %username, posts = posts.len(), "Fetched posts");
                    return Ok(posts);
                },
                Err(err @ PostsError::NotFound { .. }) => return Err(err),
                Err(err) => {
                    warn!(instance = %base, error = %err, "Nitter instance failed, trying next");
                    failures.push(err.to_string());
                },
            }
        }

        Err(PostsError::Unavailable {
            message: format!(
                "All {} instance(s) failed. Last error: {}",
                self.instances.len(),
                failures.last().map_or("none", String::as_str)
            )
            .into(),
            context: None,
        })
    }
}
