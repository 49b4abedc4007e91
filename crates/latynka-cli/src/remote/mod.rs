//! Remote language file lookup.
//!
//! All reads go through [`Fetcher`]; [`HttpFetcher`] is the network
//! implementation.

mod http;
mod manifest;
#[cfg(test)]
pub(crate) mod testutil;

use serde::de::DeserializeOwned;

pub use http::HttpFetcher;
pub use manifest::{
    fetch_translation, object_url, resolve_language_asset, AssetIndex, AssetIndexRef, AssetObject,
    Channel, FetchedTranslation, LatestVersions, ResolvedAsset, VersionDescriptor,
    VersionManifest, VersionMetadata,
};

/// Source of remote documents, addressed by URL.
pub trait Fetcher {
    /// Fetch the body at `url` as text.
    fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        source: serde_json::Error,
    },

    #[error("version {0} not found in manifest")]
    VersionNotFound(String),

    #[error("asset {0} not found in asset index")]
    AssetNotFound(String),

    #[error("invalid object hash: {0:?}")]
    BadHash(String),

    #[error("{url}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        url: String,
        expected: u64,
        actual: u64,
    },
}

/// Fetch `url` and parse the body as JSON.
pub fn get_json<T: DeserializeOwned>(fetcher: &dyn Fetcher, url: &str) -> Result<T, FetchError> {
    parse_json(url, &fetcher.get_text(url)?)
}

fn parse_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Json {
        url: url.to_string(),
        source,
    })
}
