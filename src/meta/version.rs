use chrono::{DateTime, Utc};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionKind {
    Release,
    Snapshot,
    OldBeta,
    OldAlpha,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: VersionKind,
    pub url: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "releaseTime")]
    pub release_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LatestVersions {
    pub release: Option<String>,
    pub snapshot: Option<String>,
}

/// Every version listed by the version manifest, in manifest order.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionCatalog {
    #[serde(default)]
    latest: LatestVersions,
    versions: Vec<VersionRecord>,
}

impl VersionCatalog {
    pub fn versions(&self) -> &[VersionRecord] {
        &self.versions
    }

    pub fn latest(&self) -> &LatestVersions {
        &self.latest
    }

    pub fn get(&self, id: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|version| version.id == id)
    }

    pub fn find(&self, id: &str) -> Result<&VersionRecord, Error> {
        self.get(id)
            .ok_or_else(|| Error::VersionNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl TryFrom<&[u8]> for VersionCatalog {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Ok(serde_json::from_slice(data)?)
    }
}
