use crate::config::ScraperConfig;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue, USER_AGENT};
use scraper::Html;
use std::error::Error;
use std::fmt;
use std::thread;
use std::time::Duration;

/// Error returned when a page could not be fetched
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (connection, timeout, body read)
    Request { url: String, source: reqwest::Error },

    /// The server answered with a non-success status code
    Status { url: String, status: StatusCode },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Request { url, source } => {
                write!(f, "Request to {} failed: {}", url, source)
            }
            FetchError::Status { url, status } => {
                write!(f, "Request to {} returned status {}", url, status)
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FetchError::Request { source, .. } => Some(source),
            FetchError::Status { .. } => None,
        }
    }
}

/// Boundary between HTTP transport and page processing
///
/// Callers treat any error as "skip this URL" and continue the run.
pub trait Fetch {
    /// Fetch an absolute URL and parse the response body into a document
    fn fetch(&self, url: &str) -> Result<Html, FetchError>;
}

/// Blocking HTTP fetcher with browser-emulating headers
pub struct Fetcher {
    client: Client,
    request_delay: Duration,
}

impl Fetcher {
    /// Build a client from the configured headers, timeout and delay
    pub fn new(config: &ScraperConfig) -> Result<Self, Box<dyn Error>> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);
        headers.insert(ACCEPT, HeaderValue::from_str(&config.accept)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&config.accept_language)?);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }
}

impl Fetch for Fetcher {
    fn fetch(&self, url: &str) -> Result<Html, FetchError> {
        if !self.request_delay.is_zero() {
            thread::sleep(self.request_delay);
        }

        ::log::info!("Fetching: {}", url);

        let response = match self.client.get(url).send() {
            Ok(response) => response,
            Err(e) => {
                ::log::error!("Failed to fetch {}: {}", url, e);
                return Err(FetchError::Request {
                    url: url.to_string(),
                    source: e,
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            ::log::error!("Failed to fetch {}: status {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => {
                ::log::error!("Failed to read body of {}: {}", url, e);
                return Err(FetchError::Request {
                    url: url.to_string(),
                    source: e,
                });
            }
        };

        Ok(Html::parse_document(&body))
    }
}
