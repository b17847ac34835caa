use reqwest::StatusCode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("web request - {0}")]
    Request(String),
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: StatusCode },
    #[error("malformed response - {0}")]
    Parse(String),
    #[error("version {0} not found")]
    VersionNotFound(String),
    #[error("version {0} is not in the resolved catalog")]
    Lookup(String),
    #[error("version {0} uses a legacy asset format, which is not supported")]
    UnsupportedVersion(String),
    #[error("archive - {0}")]
    Archive(String),
    #[error("client package has no {0} entry")]
    MissingPackageEntry(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}
