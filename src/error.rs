use std::sync::Arc;

use crate::models::RequestError;

/// Every failure the Datatank can report.
///
/// The enum is `Clone` because a single in-flight request may be shared by
/// several callers, each of which receives its own copy of the outcome. Source
/// errors that are not themselves `Clone` are held behind an [`Arc`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum DatatankError {
    #[error("API error: {0}")]
    Request(RequestError),

    #[error("Unexpected HTTP status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("HTTP error for {url}: {source}")]
    Http {
        url: String,
        source: Arc<reqwest::Error>,
    },

    #[error("JSON error for {url}: {source}")]
    Json {
        url: String,
        source: Arc<serde_json::Error>,
    },

    #[error("Image error for {url}: {source}")]
    Image {
        url: String,
        source: Arc<image::ImageError>,
    },

    #[error("IO error: {0}")]
    Io(Arc<std::io::Error>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Offline mode is enabled; refusing to fetch {0}")]
    Offline(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DatatankError {
    /// The structured API error, if the server returned one.
    pub fn request_error(&self) -> Option<&RequestError> {
        match self {
            DatatankError::Request(err) => Some(err),
            _ => None,
        }
    }

    pub(crate) fn http(url: &str, err: reqwest::Error) -> Self {
        DatatankError::Http {
            url: url.to_string(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn json(url: &str, err: serde_json::Error) -> Self {
        DatatankError::Json {
            url: url.to_string(),
            source: Arc::new(err),
        }
    }

    pub(crate) fn image(url: &str, err: image::ImageError) -> Self {
        DatatankError::Image {
            url: url.to_string(),
            source: Arc::new(err),
        }
    }
}

impl From<std::io::Error> for DatatankError {
    fn from(err: std::io::Error) -> Self {
        DatatankError::Io(Arc::new(err))
    }
}

impl From<RequestError> for DatatankError {
    fn from(err: RequestError) -> Self {
        DatatankError::Request(err)
    }
}

pub type Result<T> = std::result::Result<T, DatatankError>;
