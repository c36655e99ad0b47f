use std::{error::Error, fmt::Display, sync::Arc, time::Duration};

use log::info;
use reqwest::{Client, IntoUrl};

/// Single-shot text download with a bounded wait. No retries.
pub struct Fetcher {
    http_client: Arc<Client>,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(http_client: Arc<Client>, timeout: Duration) -> Self {
        Fetcher {
            http_client,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn fetch(&self, origin: impl IntoUrl) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(origin)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        info!("HTTP status: {}", status);
        if !status.is_success() {
            return Err(FetchError::RequestNotSuccess(status.as_u16()));
        }

        let text = response.text().await?;
        info!("Fetched {} bytes", text.len());

        Ok(text)
    }
}

#[derive(Debug)]
pub enum FetchError {
    RequestError(reqwest::Error),
    RequestNotSuccess(u16),
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestError(e) => {
                e.fmt(f)?;

                // reqwest keeps the actual cause (timeout, refused, dns) in the source chain
                let mut source = e.source();
                while let Some(cause) = source {
                    write!(f, ": {}", cause)?;
                    source = cause.source();
                }
                Ok(())
            }
            Self::RequestNotSuccess(status_code) => {
                write!(f, "Server respond with status code {}", status_code)
            }
        }
    }
}

impl Error for FetchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RequestError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}
