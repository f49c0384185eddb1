use serde::{Deserialize, Serialize};

use super::object::{ErrorObject, Object};

/// A structured failure returned by the API with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{code} [{status}]: {details}")]
pub struct RequestError {
    object: Object<ErrorObject>,
    /// Machine-readable form of the HTTP status, e.g. `not_found`.
    pub code: String,
    pub status: u16,
    pub details: String,
    /// Finer-grained reason for the failure, such as `ambiguous` for a 404.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub warnings: Option<Vec<String>>,
}

impl RequestError {
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
