use crate::error::Error;

const LEGACY_ASSET_KINDS: [&str; 2] = ["pre-1.6", "legacy"];

#[derive(Debug, Clone, Deserialize)]
pub struct AssetIndexRef {
    pub id: String,
    pub url: String,
    pub sha1: Option<String>,
    pub size: Option<u64>,
    #[serde(rename = "totalSize")]
    pub total_size: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Download {
    pub url: String,
    pub sha1: Option<String>,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Downloads {
    pub client: Download,
}

/// The per-version document the version manifest points at.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionMetadata {
    pub id: String,
    /// Asset index kind, e.g. `1.16`, `legacy` or `pre-1.6`.
    pub assets: String,
    #[serde(rename = "assetIndex")]
    pub asset_index: AssetIndexRef,
    pub downloads: Downloads,
}

impl VersionMetadata {
    pub fn has_legacy_assets(&self) -> bool {
        LEGACY_ASSET_KINDS.contains(&self.assets.as_str())
    }

    pub fn client_url(&self) -> &str {
        &self.downloads.client.url
    }
}

impl TryFrom<&[u8]> for VersionMetadata {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Ok(serde_json::from_slice(data)?)
    }
}
