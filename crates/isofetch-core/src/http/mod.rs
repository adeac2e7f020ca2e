//! Blocking HTTP GET over libcurl.
//!
//! Bodies are buffered in memory and only handed back on HTTP 200, so a
//! miss never leaves anything on disk.

mod error;

pub use error::FetchError;

use crate::config::FetchConfig;
use std::time::Duration;

/// One GET, body returned only on HTTP 200.
pub trait HttpGet {
    fn get(&mut self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// libcurl-backed client; one easy handle per request.
#[derive(Debug, Clone)]
pub struct CurlClient {
    user_agent: String,
    connect_timeout: Duration,
    timeout: Duration,
}

impl CurlClient {
    pub fn new(user_agent: &str, connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            user_agent: user_agent.to_string(),
            connect_timeout,
            timeout,
        }
    }

    pub fn from_config(cfg: &FetchConfig) -> Self {
        Self::new(&cfg.user_agent, cfg.connect_timeout(), cfg.timeout())
    }
}

impl HttpGet for CurlClient {
    fn get(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.useragent(&self.user_agent)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code != 200 {
            return Err(FetchError::Status(code));
        }
        Ok(body)
    }
}
