use std::collections::HashMap;

use serde::Deserialize;
use tracing::{info, warn};

use latynka_core::settings::RemoteSettings;
use latynka_core::TranslationDocument;

use super::{get_json, parse_json, FetchError, Fetcher};

/// Which "latest" pointer of the version manifest to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stable,
    Edge,
}

impl Channel {
    /// The literal `snapshot` selects the edge channel; anything else is stable.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("snapshot") => Channel::Edge,
            _ => Channel::Stable,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<VersionDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

#[derive(Debug, Deserialize)]
pub struct VersionDescriptor {
    pub id: String,
    pub url: String,
}

impl VersionManifest {
    pub fn latest_id(&self, channel: Channel) -> &str {
        match channel {
            Channel::Stable => &self.latest.release,
            Channel::Edge => &self.latest.snapshot,
        }
    }

    pub fn find(&self, id: &str) -> Option<&VersionDescriptor> {
        self.versions.iter().find(|v| v.id == id)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionMetadata {
    pub asset_index: AssetIndexRef,
}

#[derive(Debug, Deserialize)]
pub struct AssetIndexRef {
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct AssetIndex {
    pub objects: HashMap<String, AssetObject>,
}

#[derive(Debug, Deserialize)]
pub struct AssetObject {
    pub hash: String,
    /// Byte length of the object; `0` when the index omits it.
    #[serde(default)]
    pub size: u64,
}

/// Where the language file of a version lives in the object store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
    pub version: String,
    pub hash: String,
    pub size: u64,
    pub url: String,
}

pub struct FetchedTranslation {
    pub asset: ResolvedAsset,
    pub document: TranslationDocument,
}

/// Object store URL: `<base>/<first two hash digits>/<hash>`.
pub fn object_url(base: &str, hash: &str) -> Result<String, FetchError> {
    if hash.len() < 2 || !hash.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FetchError::BadHash(hash.to_string()));
    }
    Ok(format!("{}/{}/{hash}", base.trim_end_matches('/'), &hash[..2]))
}

/// Follow manifest → version metadata → asset index to the language file.
pub fn resolve_language_asset(
    fetcher: &dyn Fetcher,
    remote: &RemoteSettings,
    channel: Channel,
) -> Result<ResolvedAsset, FetchError> {
    let manifest: VersionManifest = get_json(fetcher, &remote.manifest_url)?;
    let version = manifest.latest_id(channel).to_string();
    let Some(descriptor) = manifest.find(&version) else {
        warn!("Can't find version {version}");
        return Err(FetchError::VersionNotFound(version));
    };
    info!("Latest {channel:?} version: {version}");

    let metadata: VersionMetadata = get_json(fetcher, &descriptor.url)?;
    let index: AssetIndex = get_json(fetcher, &metadata.asset_index.url)?;
    let object = index
        .objects
        .get(&remote.source_asset)
        .ok_or_else(|| FetchError::AssetNotFound(remote.source_asset.clone()))?;
    info!("Found {} hash: {}", remote.source_asset, object.hash);

    let url = object_url(&remote.resource_base_url, &object.hash)?;
    Ok(ResolvedAsset {
        version,
        hash: object.hash.clone(),
        size: object.size,
        url,
    })
}

/// Resolve and download the language file for `channel`.
pub fn fetch_translation(
    fetcher: &dyn Fetcher,
    remote: &RemoteSettings,
    channel: Channel,
) -> Result<FetchedTranslation, FetchError> {
    let asset = resolve_language_asset(fetcher, remote, channel)?;
    info!("Fetching {}", asset.url);
    let body = fetcher.get_text(&asset.url)?;
    let actual = body.len() as u64;
    if asset.size > 0 && actual != asset.size {
        return Err(FetchError::SizeMismatch {
            url: asset.url,
            expected: asset.size,
            actual,
        });
    }
    let document: TranslationDocument = parse_json(&asset.url, &body)?;
    info!(entries = document.len(), "fetched language file");
    Ok(FetchedTranslation { asset, document })
}
