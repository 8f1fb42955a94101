//! Errors produced while moving a map slice to and from JSON text.

use serde_json::Error as JsonError;
use serde_json::error::Category;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot encode {container} as JSON: {source}")]
    Encode {
        container: &'static str,
        #[source] source: JsonError,
    },
    #[error("cannot decode JSON object: {0}")]
    Decode(#[source] JsonError),
}

impl Error {
    pub fn is_encode(&self) -> bool {
        matches!(self, Self::Encode { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(..))
    }

    /// Returns the kind of JSON failure underlying this error.
    /// Malformed text is `Syntax`, a well-formed non-object is `Data`, and
    /// truncated input is `Eof`.
    pub fn category(&self) -> Category {
        match self {
            Self::Encode { source, .. } => source.classify(),
            Self::Decode(source) => source.classify(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
