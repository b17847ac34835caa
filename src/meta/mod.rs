use asset_index::AssetIndex;
use metadata::VersionMetadata;
use std::io::Write;
use transport::{ReqwestTransport, Transport};
use version::{VersionCatalog, VersionRecord};

use crate::{config::Config, error::Error};

pub mod asset_index;
pub mod metadata;
pub mod transport;
pub mod version;

/// Content-addressed object location: `<host>/<first two hash chars>/<hash>`.
pub fn asset_url(resource_host: &str, hash: &str) -> Result<String, Error> {
    let prefix = hash
        .get(..2)
        .ok_or_else(|| Error::Parse(format!("asset hash {hash:?} is too short")))?;
    Ok(format!("{resource_host}/{prefix}/{hash}"))
}

pub struct MetaClient<T = ReqwestTransport> {
    config: Config,
    transport: T,
}

impl MetaClient {
    pub fn new(config: Config) -> Result<Self, Error> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> MetaClient<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn resolve(&self) -> Result<VersionCatalog, Error> {
        self.resolve_from(&self.config.manifest_url).await
    }

    pub async fn resolve_from(&self, manifest_url: &str) -> Result<VersionCatalog, Error> {
        tracing::info!("Retrieving version data from {manifest_url}");
        let bytes = self.transport.get(manifest_url).await?;
        let catalog = VersionCatalog::try_from(&bytes[..])?;
        tracing::debug!("version manifest lists {} versions", catalog.len());
        Ok(catalog)
    }

    /// Fetches the metadata of `version_id`, which must be listed in `catalog`.
    pub async fn get_version_meta(
        &self,
        catalog: &VersionCatalog,
        version_id: &str,
    ) -> Result<VersionMetadata, Error> {
        let record = catalog
            .get(version_id)
            .ok_or_else(|| Error::Lookup(version_id.to_string()))?;
        self.get_version_meta_for(record).await
    }

    pub async fn get_version_meta_for(
        &self,
        record: &VersionRecord,
    ) -> Result<VersionMetadata, Error> {
        tracing::info!("Retrieving metadata for version {}", record.id);
        let bytes = self.transport.get(&record.url).await?;
        VersionMetadata::try_from(&bytes[..])
    }

    /// Returns `None` for legacy asset formats, which are not fetched.
    pub async fn get_asset_index(
        &self,
        metadata: &VersionMetadata,
    ) -> Result<Option<AssetIndex>, Error> {
        if metadata.has_legacy_assets() {
            tracing::warn!(
                "Legacy or {} asset index for version {} detected",
                metadata.assets,
                metadata.id
            );
            return Ok(None);
        }

        tracing::info!(
            "Found asset index {} - total assets size: {} KiB",
            metadata.asset_index.id,
            metadata.asset_index.total_size / 1024
        );
        let bytes = self.transport.get(&metadata.asset_index.url).await?;
        Ok(Some(AssetIndex::try_from(&bytes[..])?))
    }

    /// Streams the object with `hash` into `sink`.
    pub async fn download_asset(
        &self,
        hash: &str,
        sink: &mut (dyn Write + Send),
    ) -> Result<u64, Error> {
        let url = asset_url(&self.config.resource_host, hash)?;
        self.transport.download(&url, sink).await
    }

    pub async fn download_client(
        &self,
        metadata: &VersionMetadata,
        sink: &mut (dyn Write + Send),
    ) -> Result<u64, Error> {
        tracing::info!("Retrieving client jar for version {}", metadata.id);
        self.transport.download(metadata.client_url(), sink).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::meta::metadata::tests::metadata_json;
    use crate::meta::transport::mock::MockTransport;

    pub const MANIFEST_URL: &str = "https://example/version_manifest.json";

    pub fn manifest_json(versions: &[(&str, &str)]) -> String {
        let entries: Vec<String> = versions
            .iter()
            .map(|(id, url)| {
                format!(
                    r#"{{"id": "{id}", "type": "release", "url": "{url}",
                        "time": "2020-09-10T13:42:37+00:00",
                        "releaseTime": "2020-09-10T13:42:37+00:00"}}"#
                )
            })
            .collect();
        format!(r#"{{"versions": [{}]}}"#, entries.join(","))
    }

    fn client(transport: MockTransport) -> MetaClient<MockTransport> {
        MetaClient::with_transport(
            Config::default()
                .with_manifest_url(MANIFEST_URL)
                .with_resource_host("http://objects"),
            transport,
        )
    }

    #[test]
    fn asset_url_is_sharded_by_hash_prefix() {
        assert_eq!(
            asset_url("http://resources.download.minecraft.net", "abcd1234").unwrap(),
            "http://resources.download.minecraft.net/ab/abcd1234"
        );
        assert!(matches!(asset_url("http://objects", "a"), Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn resolves_and_fetches_metadata() {
        let transport = MockTransport::default()
            .with(MANIFEST_URL, manifest_json(&[("1.16.3", "https://example/meta.json")]))
            .with(
                "https://example/meta.json",
                metadata_json(
                    "1.16.3",
                    "1.16",
                    "https://example/index.json",
                    "https://example/client.jar",
                ),
            )
            .with(
                "https://example/index.json",
                r#"{"objects": {"pack.mcmeta": {"hash": "h1", "size": 1}}}"#,
            );
        let client = client(transport);

        let catalog = client.resolve().await.unwrap();
        assert_eq!(catalog.len(), 1);

        let metadata = client.get_version_meta(&catalog, "1.16.3").await.unwrap();
        assert_eq!(metadata.assets, "1.16");

        let index = client.get_asset_index(&metadata).await.unwrap().unwrap();
        assert_eq!(index.hash("pack.mcmeta"), Some("h1"));
    }

    #[tokio::test]
    async fn unresolved_version_is_a_lookup_error() {
        let transport = MockTransport::default().with(
            MANIFEST_URL,
            manifest_json(&[("1.16.3", "https://example/meta.json")]),
        );
        let client = client(transport);
        let catalog = client.resolve().await.unwrap();

        let result = client.get_version_meta(&catalog, "1.12.2").await;
        assert!(matches!(result, Err(Error::Lookup(id)) if id == "1.12.2"));
    }

    #[tokio::test]
    async fn legacy_index_is_not_fetched() {
        let client = client(MockTransport::default());
        for assets in ["legacy", "pre-1.6"] {
            let json = metadata_json(
                "1.5.2",
                assets,
                "https://example/index.json",
                "https://example/client.jar",
            );
            let metadata = VersionMetadata::try_from(json.as_bytes()).unwrap();
            assert!(client.get_asset_index(&metadata).await.unwrap().is_none());
        }
        assert!(client.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn failed_manifest_fetch_is_a_network_error() {
        let client = client(MockTransport::default());
        assert!(matches!(client.resolve().await, Err(Error::HttpStatus { .. })));
    }

    #[tokio::test]
    async fn downloads_asset_by_hash() {
        let transport = MockTransport::default().with("http://objects/ab/abcdef", "ogg bytes");
        let client = client(transport);

        let mut sink = Vec::new();
        let written = client.download_asset("abcdef", &mut sink).await.unwrap();
        assert_eq!(written, 9);
        assert_eq!(sink, b"ogg bytes");
    }
}
