use package::{ClientPackage, PACK_IMAGE};
use std::{
    collections::HashSet,
    io::{Seek, Write},
};
use zip::{write::SimpleFileOptions, CompressionMethod, DateTime, ZipWriter};

use crate::{
    error::Error,
    meta::{
        asset_index::AssetIndex, metadata::VersionMetadata, transport::Transport,
        version::VersionCatalog, MetaClient,
    },
    progress::Progress,
};

pub mod package;

/// Everything needed to write a version's archive, resolved ahead of any write.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub metadata: VersionMetadata,
    pub index: AssetIndex,
}

pub struct Assembler<'a, T, P> {
    client: &'a MetaClient<T>,
    progress: P,
}

// Fixed timestamp so identical inputs give identical archives.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

impl<'a, T: Transport, P: Progress> Assembler<'a, T, P> {
    pub fn new(client: &'a MetaClient<T>, progress: P) -> Self {
        Self { client, progress }
    }

    pub async fn prepare(
        &self,
        catalog: &VersionCatalog,
        version_id: &str,
    ) -> Result<Assembly, Error> {
        let record = catalog.find(version_id)?;
        let metadata = self.client.get_version_meta_for(record).await?;
        let index = self
            .client
            .get_asset_index(&metadata)
            .await?
            .ok_or_else(|| Error::UnsupportedVersion(version_id.to_string()))?;
        Ok(Assembly { metadata, index })
    }

    /// Writes every indexed object, `pack.png` and the packaged assets into a
    /// new zip on `writer`. A failure leaves whatever was written so far.
    pub async fn write<W: Write + Seek + Send>(
        &self,
        assembly: &Assembly,
        writer: W,
    ) -> Result<W, Error> {
        let mut jar = tempfile::tempfile()?;
        self.client
            .download_client(&assembly.metadata, &mut jar)
            .await?;
        let mut package = ClientPackage::new(jar)?;

        // Zip names are unique; an indexed object wins over the jar's copy.
        let indexed: HashSet<String> = assembly
            .index
            .iter()
            .map(|(path, _)| AssetIndex::archive_path(path))
            .collect();
        let packaged: Vec<String> = package
            .asset_entries()
            .into_iter()
            .filter(|name| {
                let shadowed = indexed.contains(name);
                if shadowed {
                    tracing::warn!(
                        "Skipping {name} from the client jar, already written from the asset index"
                    );
                }
                !shadowed
            })
            .collect();

        let total = assembly.index.len() + packaged.len() + 1;
        let options = entry_options();
        let mut archive = ZipWriter::new(writer);
        let mut unit = 0;

        for (path, hash) in &assembly.index {
            let name = AssetIndex::archive_path(path);
            self.progress.report(unit, total, &name);
            unit += 1;
            archive.start_file(name.as_str(), options)?;
            self.client.download_asset(hash, &mut archive).await?;
        }

        self.progress.report(unit, total, PACK_IMAGE);
        unit += 1;
        package.copy_entry(PACK_IMAGE, &mut archive)?;

        for name in &packaged {
            self.progress.report(unit, total, name);
            unit += 1;
            package.copy_entry(name, &mut archive)?;
        }

        tracing::debug!("wrote {unit} archive entries for version {}", assembly.metadata.id);
        Ok(archive.finish()?)
    }

    pub async fn assemble<W: Write + Seek + Send>(
        &self,
        catalog: &VersionCatalog,
        version_id: &str,
        writer: W,
    ) -> Result<W, Error> {
        let assembly = self.prepare(catalog, version_id).await?;
        self.write(&assembly, writer).await
    }
}
