use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::FetchConfig;
use crate::error::FetchError;

/// Capability for reading the raw content of a page.
///
/// Timeouts and cancellation are the implementation's concern; callers
/// neither retry nor impose their own deadline.
#[async_trait]
pub trait PageReader: Send + Sync {
    /// Fetch the page at `url` as text.
    async fn read_page(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<T: PageReader + ?Sized> PageReader for Box<T> {
    async fn read_page(&self, url: &str) -> Result<String, FetchError> {
        (**self).read_page(url).await
    }
}

/// Reads pages over HTTP(S).
pub struct HttpPageReader {
    client: reqwest::Client,
}

impl HttpPageReader {
    /// Create a reader with the given timeout and user agent.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                reason: format!("could not build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageReader for HttpPageReader {
    async fn read_page(&self, url: &str) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let resp = self.client.get(url).send().await.map_err(transport)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(transport)?;
        tracing::debug!(url = url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}

/// Serves pages from an in-memory map of URL to content.
#[derive(Debug, Clone, Default)]
pub struct StaticPageReader {
    pages: HashMap<String, String>,
}

impl StaticPageReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page, builder style.
    pub fn with_page(mut self, url: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(url, content);
        self
    }

    /// Add or replace a page.
    pub fn insert(&mut self, url: impl Into<String>, content: impl Into<String>) {
        self.pages.insert(url.into(), content.into());
    }
}

#[async_trait]
impl PageReader for StaticPageReader {
    async fn read_page(&self, url: &str) -> Result<String, FetchError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}
