use std::collections::HashMap;

use super::{FetchError, Fetcher};

pub(crate) const MANIFEST_URL: &str = "https://meta.test/version_manifest.json";
pub(crate) const OBJECTS_URL: &str = "https://objects.test";
pub(crate) const RELEASE_HASH: &str = "ab12cd34ef56ab12cd34ef56ab12cd34ef56ab12";
pub(crate) const SNAPSHOT_HASH: &str = "9f00aa11bb22cc33dd44ee55ff66007788990011";

const MANIFEST: &str = r#"{
  "latest": {"release": "1.21", "snapshot": "24w10a"},
  "versions": [
    {"id": "24w10a", "type": "snapshot", "url": "https://meta.test/24w10a.json"},
    {"id": "1.21", "type": "release", "url": "https://meta.test/1.21.json"}
  ]
}"#;

/// In-memory fetcher keyed by URL.
#[derive(Default)]
pub(crate) struct MapFetcher {
    bodies: HashMap<String, String>,
}

impl MapFetcher {
    pub(crate) fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetcher for MapFetcher {
    fn get_text(&self, url: &str) -> Result<String, FetchError> {
        self.bodies
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Http(format!("{url}: 404 Not Found")))
    }
}

fn asset_index(hash: &str, size: usize) -> String {
    format!(
        r#"{{"objects": {{
  "minecraft/lang/uk_ua.json": {{"hash": "{hash}", "size": {size}}},
  "minecraft/lang/en_us.json": {{"hash": "ffff", "size": 10}}
}}}}"#
    )
}

/// A manifest whose latest release is `1.21` and latest snapshot `24w10a`.
/// Each version has its own asset index and language file; the indexed
/// sizes match the bodies.
pub(crate) fn fake_remote(release_lang: &str, snapshot_lang: &str) -> MapFetcher {
    MapFetcher::default()
        .with(MANIFEST_URL, MANIFEST)
        .with(
            "https://meta.test/1.21.json",
            r#"{"id": "1.21", "assetIndex": {"id": "17", "url": "https://meta.test/indexes/17.json"}}"#,
        )
        .with(
            "https://meta.test/24w10a.json",
            r#"{"id": "24w10a", "assetIndex": {"id": "18", "url": "https://meta.test/indexes/18.json"}}"#,
        )
        .with("https://meta.test/indexes/17.json", &asset_index(RELEASE_HASH, release_lang.len()))
        .with("https://meta.test/indexes/18.json", &asset_index(SNAPSHOT_HASH, snapshot_lang.len()))
        .with(&format!("{OBJECTS_URL}/ab/{RELEASE_HASH}"), release_lang)
        .with(&format!("{OBJECTS_URL}/9f/{SNAPSHOT_HASH}"), snapshot_lang)
}

/// A manifest whose latest release is not in its version list.
pub(crate) fn remote_missing_release() -> MapFetcher {
    MapFetcher::default().with(
        MANIFEST_URL,
        r#"{"latest": {"release": "9.99", "snapshot": "24w10a"}, "versions": []}"#,
    )
}
