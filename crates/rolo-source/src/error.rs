use std::fmt;

/// Result type for rolo-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the remote source boundary
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (DNS, connect, read)
    Http(reqwest::Error),

    /// Non-success HTTP status from the generator
    Status(u16),

    /// Response body was not the expected JSON shape
    Json(serde_json::Error),

    /// A record passed JSON parsing but is missing required fields
    Schema(String),

    /// Endpoint URL could not be parsed or extended
    Url(url::ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status(code) => write!(f, "Request failed with status {}", code),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Schema(msg) => write!(f, "Schema error: {}", msg),
            Error::Url(err) => write!(f, "URL error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Url(err) => Some(err),
            Error::Status(_) | Error::Schema(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}
