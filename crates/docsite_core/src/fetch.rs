//! JSON loading through a host-supplied fetch primitive.
//!
//! # Responsibility
//! - Turn one fetch into decoded JSON or a typed failure.
//! - Log a diagnostic for every failure before handing it back.
//!
//! # Invariants
//! - Only 2xx statuses are decoded; everything else fails.
//! - No retry and no cancellation: one call, one fetch.

use crate::logging::{sanitize_message, MAX_LOG_FIELD_CHARS};
use log::{debug, error};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LoadResult<T> = Result<T, LoadError>;

/// Raw response returned by a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses, like `Response.ok`.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Transport-level failure reported by a [`Fetcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkError(pub String);

impl Display for NetworkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for NetworkError {}

/// Network capability, the analog of `fetch(url)`.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<FetchResponse, NetworkError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<FetchResponse, NetworkError> {
        (**self).fetch(url)
    }
}

/// JSON load failures.
#[derive(Debug)]
pub enum LoadError {
    Network {
        url: String,
        source: NetworkError,
    },
    HttpStatus {
        url: String,
        status: u16,
    },
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::HttpStatus { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { url, source } => write!(f, "failed to fetch `{url}`: {source}"),
            Self::HttpStatus { url, status } => {
                write!(f, "HTTP error! status: {status} (url `{url}`)")
            }
            Self::Decode { url, source } => {
                write!(f, "response from `{url}` is not valid JSON: {source}")
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Network { source, .. } => Some(source),
            Self::HttpStatus { .. } => None,
            Self::Decode { source, .. } => Some(source),
        }
    }
}

/// Fetches `url` and decodes the body as untyped JSON.
pub fn load_json(fetcher: &impl Fetcher, url: &str) -> LoadResult<Value> {
    load_json_as(fetcher, url)
}

/// Fetches `url` and decodes the body into `T`.
///
/// # Errors
/// - `LoadError::Network` when the fetch itself fails.
/// - `LoadError::HttpStatus` for any non-2xx status.
/// - `LoadError::Decode` when the body does not match `T`.
pub fn load_json_as<T: DeserializeOwned>(fetcher: &impl Fetcher, url: &str) -> LoadResult<T> {
    let result = fetch_and_decode(fetcher, url);
    match &result {
        Ok(_) => debug!(
            "event=load_json module=fetch status=ok url={}",
            sanitize_message(url, MAX_LOG_FIELD_CHARS)
        ),
        Err(err) => error!(
            "event=load_json module=fetch status=error url={} error={}",
            sanitize_message(url, MAX_LOG_FIELD_CHARS),
            sanitize_message(&err.to_string(), MAX_LOG_FIELD_CHARS)
        ),
    }
    result
}

fn fetch_and_decode<T: DeserializeOwned>(fetcher: &impl Fetcher, url: &str) -> LoadResult<T> {
    let response = fetcher.fetch(url).map_err(|source| LoadError::Network {
        url: url.to_string(),
        source,
    })?;
    if !response.ok() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: response.status,
        });
    }
    response.json().map_err(|source| LoadError::Decode {
        url: url.to_string(),
        source,
    })
}
