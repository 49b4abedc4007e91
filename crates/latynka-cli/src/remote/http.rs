use tracing::debug;

use super::{FetchError, Fetcher};

/// Largest response body accepted (asset indexes run to a few MiB).
const BODY_LIMIT: u64 = 64 * 1024 * 1024;

/// Blocking HTTP fetcher. No retries.
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");
        ureq::get(url)
            .call()
            .map_err(|e| FetchError::Http(format!("{url}: {e}")))?
            .into_body()
            .with_config()
            .limit(BODY_LIMIT)
            .read_to_string()
            .map_err(|e| FetchError::Http(format!("{url}: {e}")))
    }
}
