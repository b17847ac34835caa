use std::{
    fs::File,
    io::{Read, Seek, Write},
};
use zip::{result::ZipError, ZipArchive, ZipWriter};

use crate::error::Error;

pub const ASSETS_PREFIX: &str = "assets/";
pub const ASSETS_ROOT_MARKER: &str = "assets/.mcassetsroot";
pub const PACK_IMAGE: &str = "pack.png";

pub fn is_packaged_asset(name: &str) -> bool {
    name != ASSETS_ROOT_MARKER && name.starts_with(ASSETS_PREFIX)
}

/// A version's client jar, opened read-only.
pub struct ClientPackage<R = File> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> ClientPackage<R> {
    pub fn new(reader: R) -> Result<Self, Error> {
        Ok(Self {
            archive: ZipArchive::new(reader)?,
        })
    }

    /// Entries under `assets/` other than the assets root marker, in archive order.
    pub fn asset_entries(&self) -> Vec<String> {
        self.archive
            .file_names()
            .filter(|name| is_packaged_asset(name))
            .map(str::to_string)
            .collect()
    }

    /// Copies `name` into `writer` as is, compressed data and header included.
    pub fn copy_entry<W: Write + Seek>(
        &mut self,
        name: &str,
        writer: &mut ZipWriter<W>,
    ) -> Result<(), Error> {
        let entry = self.archive.by_name(name).map_err(|err| match err {
            ZipError::FileNotFound => Error::MissingPackageEntry(name.to_string()),
            err => err.into(),
        })?;
        writer.raw_copy_file(entry)?;
        Ok(())
    }
}
