//! Error types for rs-pismo.
//!
//! Only loading a document can fail. Attribute accessors are total over any
//! loaded document and report missing data as `None` or an empty collection.

/// Error type for document loading.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Fetching a URL handle failed (DNS, timeout, TLS, HTTP status).
    ///
    /// The fetcher's own error is kept as the source, untouched.
    #[error("failed to fetch {url}: {source}")]
    Retrieval {
        /// The URL that was requested.
        url: String,
        /// The underlying transport error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Reading a stream handle failed.
    #[error("failed to read input stream: {0}")]
    Io(#[from] std::io::Error),

    /// An options document could not be deserialized.
    #[error("invalid options: {0}")]
    Options(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a fetcher error for `url`.
    pub fn retrieval<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Retrieval {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Result type alias for loading operations.
pub type Result<T> = std::result::Result<T, Error>;
