//! Document loading.
//!
//! A [`Handle`] names where markup comes from: a URL to fetch, a stream to
//! read, or literal markup. The loader turns a handle into markup text and
//! the base URL used to resolve relative references. Retrieval itself is
//! delegated to a [`Fetcher`].

use std::fmt;
use std::fs::File;
use std::io::Read;

use tracing::debug;

use crate::encoding;
use crate::error::Result;
use crate::patterns::URL_HANDLE;

/// Where a document's markup comes from.
pub enum Handle {
    /// An http(s) URL to fetch.
    Url(String),
    /// A byte stream read to the end.
    Reader(Box<dyn Read>),
    /// Literal markup.
    Markup(String),
}

impl Handle {
    /// Classify a string: URLs (`http://`/`https://`, any case) are fetched,
    /// anything else is markup.
    #[must_use]
    pub fn classify(input: impl Into<String>) -> Self {
        let input = input.into();
        if URL_HANDLE.is_match(&input) {
            Self::Url(input.trim().to_string())
        } else {
            Self::Markup(input)
        }
    }

    /// Wrap any reader as a stream handle.
    pub fn reader(reader: impl Read + 'static) -> Self {
        Self::Reader(Box::new(reader))
    }
}

impl From<&str> for Handle {
    fn from(input: &str) -> Self {
        Self::classify(input)
    }
}

impl From<String> for Handle {
    fn from(input: String) -> Self {
        Self::classify(input)
    }
}

impl From<&String> for Handle {
    fn from(input: &String) -> Self {
        Self::classify(input.as_str())
    }
}

impl From<File> for Handle {
    fn from(file: File) -> Self {
        Self::reader(file)
    }
}

impl From<Box<dyn Read>> for Handle {
    fn from(reader: Box<dyn Read>) -> Self {
        Self::Reader(reader)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.debug_tuple("Url").field(url).finish(),
            Self::Reader(_) => f.write_str("Reader(..)"),
            Self::Markup(markup) => f.debug_tuple("Markup").field(&markup.len()).finish(),
        }
    }
}

/// Retrieves raw bytes for a URL.
///
/// Implementations report failures as [`Error::Retrieval`](crate::Error::Retrieval)
/// and must not retry; the loader passes errors through unchanged.
pub trait Fetcher {
    /// Fetch `url`, sending `user_agent` as the `User-Agent` header.
    fn fetch(&self, url: &str, user_agent: &str) -> Result<Vec<u8>>;
}

/// A fetcher that refuses every request.
///
/// Used by documents built from in-memory markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Offline;

impl Fetcher for Offline {
    fn fetch(&self, url: &str, _user_agent: &str) -> Result<Vec<u8>> {
        Err(crate::Error::retrieval(url, "network access is disabled"))
    }
}

#[cfg(feature = "http")]
pub use http::HttpFetcher;

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use reqwest::header::USER_AGENT;
    use tracing::debug;

    use super::Fetcher;
    use crate::error::{Error, Result};

    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Blocking HTTP fetcher backed by `reqwest`.
    ///
    /// Non-success statuses are reported as retrieval errors.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: Client,
    }

    impl HttpFetcher {
        /// Build a fetcher with the default timeout.
        pub fn new() -> Result<Self> {
            Self::with_timeout(DEFAULT_TIMEOUT)
        }

        /// Build a fetcher with a custom request timeout.
        pub fn with_timeout(timeout: Duration) -> Result<Self> {
            let client = Client::builder()
                .timeout(timeout)
                .build()
                .map_err(|e| Error::retrieval("<client>", e))?;
            Ok(Self { client })
        }

        /// Wrap an existing client.
        #[must_use]
        pub fn from_client(client: Client) -> Self {
            Self { client }
        }
    }

    impl Fetcher for HttpFetcher {
        fn fetch(&self, url: &str, user_agent: &str) -> Result<Vec<u8>> {
            debug!(url, user_agent, "fetching document");

            let response = self
                .client
                .get(url)
                .header(USER_AGENT, user_agent)
                .send()
                .and_then(reqwest::blocking::Response::error_for_status)
                .map_err(|e| Error::retrieval(url, e))?;

            let bytes = response.bytes().map_err(|e| Error::retrieval(url, e))?;
            debug!(url, bytes = bytes.len(), "fetched document");
            Ok(bytes.to_vec())
        }
    }
}

/// Markup and base URL produced by [`load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    /// Markup text, decoded to UTF-8.
    pub markup: String,
    /// Base URL for relative references, if one is known.
    pub url: Option<String>,
}

/// Resolve a handle into markup.
///
/// The explicit URL, when given, is the base URL. Otherwise a URL handle is
/// its own base URL, and streams and literal markup have none.
pub fn load(
    handle: Handle,
    explicit_url: Option<&str>,
    user_agent: &str,
    fetcher: &dyn Fetcher,
) -> Result<Loaded> {
    let explicit_url = explicit_url.map(str::trim).filter(|u| !u.is_empty());

    let (markup, handle_url) = match handle {
        Handle::Url(url) => {
            let bytes = fetcher.fetch(&url, user_agent)?;
            (encoding::decode_markup(&bytes), Some(url))
        }
        Handle::Reader(mut reader) => {
            let mut bytes = Vec::new();
            reader.read_to_end(&mut bytes)?;
            debug!(bytes = bytes.len(), "read markup from stream");
            (encoding::decode_markup(&bytes), None)
        }
        Handle::Markup(markup) => (markup, None),
    };

    let url = explicit_url.map(str::to_string).or(handle_url);
    debug!(url = url.as_deref().unwrap_or("<none>"), "resolved base url");

    Ok(Loaded { markup, url })
}
