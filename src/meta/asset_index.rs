use std::collections::{btree_map, BTreeMap, HashMap};

use crate::error::Error;

/// Archived at the root of the output rather than under `assets/`.
pub const PACK_METADATA: &str = "pack.mcmeta";

#[derive(Debug, Deserialize)]
struct AssetObject {
    hash: String,
}

#[derive(Debug, Deserialize)]
struct AssetIndexDocument {
    objects: HashMap<String, AssetObject>,
}

/// Logical asset path to content hash, sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    objects: BTreeMap<String, String>,
}

impl AssetIndex {
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn hash(&self, path: &str) -> Option<&str> {
        self.objects.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.objects.iter()
    }

    /// Where `path` lands in the output archive.
    pub fn archive_path(path: &str) -> String {
        if path == PACK_METADATA {
            path.to_string()
        } else {
            format!("assets/{path}")
        }
    }
}

impl<'a> IntoIterator for &'a AssetIndex {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, String)> for AssetIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            objects: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<&[u8]> for AssetIndex {
    type Error = Error;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let document: AssetIndexDocument = serde_json::from_slice(data)?;
        Ok(document
            .objects
            .into_iter()
            .map(|(path, object)| (path, object.hash))
            .collect())
    }
}
