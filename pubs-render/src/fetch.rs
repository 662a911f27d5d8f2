//! Fetching the publication list and detail files
//!
//! [`Fetcher`] is the only I/O seam of the crate. [`HttpFetcher`] talks to a live site,
//! [`DirFetcher`] reads a built site from disk. Both always go to the source; nothing is
//! cached between calls.

use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CACHE_CONTROL};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Source of text resources addressed by site-relative paths
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the resource at `path` as UTF-8 text.
    ///
    /// Non-success responses are errors, never an empty body.
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for &F {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(path).await
    }
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Arc<F> {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(path).await
    }
}

/// Fetches over HTTP(S), resolving paths against the page's base URL
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Self {
        Self::with_client(reqwest::Client::new(), base)
    }

    pub fn with_client(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Resolve a path the way a browser resolves a relative URL on the page
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|e| FetchError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// The GET request issued for `path`, always revalidated with the server
    pub fn request(&self, path: &str) -> Result<reqwest::Request, FetchError> {
        let url = self.resolve(path)?;
        self.client
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .build()
            .map_err(|e| network_error(path, e))
    }
}

fn network_error(path: &str, e: reqwest::Error) -> FetchError {
    FetchError::Network {
        path: path.to_string(),
        message: e.to_string(),
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let request = self.request(path)?;
        debug!(url = %request.url(), "fetching over HTTP");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| network_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| network_error(path, e))
    }
}

/// Reads paths from a site directory on disk
#[derive(Debug, Clone)]
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a site path below the root, refusing anything that could escape it
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let relative = Path::new(path.trim_start_matches("./"));
        let invalid = |reason: &str| FetchError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.is_empty() {
            return Err(invalid("empty path"));
        }
        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => return Err(invalid("parent directory components")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("absolute paths"))
                }
            }
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl Fetcher for DirFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        debug!(file = %file.display(), "reading from site directory");

        tokio::fs::read_to_string(&file)
            .await
            .map_err(|source| FetchError::Io {
                path: path.to_string(),
                source,
            })
    }
}
