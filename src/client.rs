//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::api::Page;
use crate::api::response::ArtworksEnvelope;
use crate::error::ApiError;

/// Base URL of the public artworks API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Client for the artworks data source.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely.
///
/// # Example
///
/// ```ignore
/// use artic_grid::ArticClient;
///
/// let client = ArticClient::new();
/// let page = client.fetch_page(0, 10).await?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a client pointed at the public API with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the data source.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Fetches one page of artworks.
    ///
    /// `page_index` is 0-based; the data source counts pages from 1, and the
    /// conversion happens here. `page_size` must be at least 1.
    ///
    /// One call makes exactly one request: no retries, and the request is not
    /// aborted if the caller stops caring about the result.
    pub async fn fetch_page(&self, page_index: usize, page_size: usize) -> Result<Page, ApiError> {
        let url = self.artworks_url(page_index, page_size)?;
        debug!("GET {url}");

        let mut request = self.inner.http_client.get(url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body));
        }

        let body = response.text().await.map_err(ApiError::from)?;
        let envelope: ArtworksEnvelope = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

        Ok(Page::new(envelope.data).with_total_count(envelope.pagination.total))
    }

    fn artworks_url(&self, page_index: usize, page_size: usize) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.inner.base_url).map_err(|e| ApiError::invalid_url(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| ApiError::invalid_url("base URL cannot be a base"))?
            .pop_if_empty()
            .push("artworks");

        // The data source counts pages from 1.
        url.query_pairs_mut()
            .append_pair("page", &(page_index + 1).to_string())
            .append_pair("limit", &page_size.to_string());

        Ok(url)
    }
}

impl Default for ArticClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing an [`ArticClient`].
///
/// Every field has a default; `build` never fails.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .base_url("https://api.artic.edu/api/v1")
///     .timeout(Duration::from_secs(30))
///     .build();
/// ```
pub struct ArticClientBuilder {
    base_url: String,
    http_client: Option<Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ArticClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Sets the base URL of the data source.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the per-request timeout.
    ///
    /// No timeout is enforced unless one is set here.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client, so it has no effect if
    /// a custom client is also set.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`ArticClient`].
    pub fn build(self) -> ArticClient {
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = self.connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().expect("Failed to build HTTP client")
        });

        ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url: self.base_url,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}

impl Default for ArticClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
