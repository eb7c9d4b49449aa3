//! libcurl GET.

use super::{FetchError, FetchResponse, Fetcher};
use crate::config::BulkConfig;
use std::time::Duration;

const MAX_REDIRECTS: u32 = 10;

/// Blocking GET with a fixed per-request timeout and User-Agent.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone)]
pub struct CurlFetcher {
    timeout: Duration,
    user_agent: String,
    follow_redirects: bool,
}

impl CurlFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>, follow_redirects: bool) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
            follow_redirects,
        }
    }

    pub fn from_config(cfg: &BulkConfig) -> Self {
        Self::new(
            Duration::from_secs(cfg.timeout_secs),
            cfg.user_agent.clone(),
            cfg.follow_redirects,
        )
    }
}

impl Fetcher for CurlFetcher {
    fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(self.follow_redirects)?;
        if self.follow_redirects {
            easy.max_redirections(MAX_REDIRECTS)?;
        }
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::trace!(url, status, bytes = body.len(), "GET finished");
        Ok(FetchResponse { status, body })
    }
}
