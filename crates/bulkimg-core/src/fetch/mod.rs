//! HTTP GET of a single image URL.
//!
//! [`CurlFetcher`] is the libcurl-backed implementation; the [`Fetcher`]
//! trait lets the batch run against anything that maps a URL to a response.

mod http;

pub use http::CurlFetcher;

use thiserror::Error;

/// Status and body of a completed GET. Any status is a completed request;
/// deciding what counts as success is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

/// Transport-level failure: no HTTP status was obtained.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Curl reported an error (timeout, connection, DNS, malformed URL, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
}

/// Issues one GET per call. Implementations do not retry.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError>;
}
