pub const VERSION_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";
pub const RESOURCE_HOST: &str = "http://resources.download.minecraft.net";

/// Endpoints and client settings used by [`MetaClient`](crate::MetaClient).
#[derive(Debug, Clone)]
pub struct Config {
    pub manifest_url: String,
    pub resource_host: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_url: VERSION_MANIFEST_URL.to_string(),
            resource_host: RESOURCE_HOST.to_string(),
            user_agent: format!("mcasset-downloader/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn with_manifest_url<S: Into<String>>(mut self, url: S) -> Self {
        self.manifest_url = url.into();
        self
    }

    /// Base URL objects are fetched from, without a trailing slash.
    pub fn with_resource_host<S: Into<String>>(mut self, host: S) -> Self {
        self.resource_host = host.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
