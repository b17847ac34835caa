#[macro_use]
extern crate serde;
#[macro_use]
extern crate thiserror;

mod archive;
mod config;
mod error;
mod meta;
mod progress;

pub use archive::{Assembler, Assembly};
pub use config::Config;
pub use error::Error;
pub use meta::{
    asset_index::{AssetIndex, PACK_METADATA},
    asset_url,
    metadata::{AssetIndexRef, Download, Downloads, VersionMetadata},
    transport::{ReqwestTransport, Transport},
    version::{LatestVersions, VersionCatalog, VersionKind, VersionRecord},
    MetaClient,
};
pub use progress::{percentage, progress_line, ConsoleProgress, Progress, SilentProgress};
