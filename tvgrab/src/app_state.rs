use std::sync::Arc;

use anyhow::{Result, ensure};
use log::info;
use reqwest::{Client, Proxy};
use url::Url;

use crate::{Config, transfer::Fetcher};

pub type AppStateRef = Arc<AppState>;
pub struct AppState {
    pub config: Arc<Config>,
    pub source_url: Url,
    pub fetcher: Fetcher,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(user_agent) = &config.http.user_agent {
            builder = builder.user_agent(user_agent)
        }

        if let Some(proxy) = &config.http.proxy {
            info!("With proxy: {}", proxy);
            builder = builder.proxy(Proxy::all(proxy.as_str())?);
        }

        Self::with_client(Arc::new(config), builder.build()?)
    }

    pub fn with_client(config: Arc<Config>, http_client: Client) -> Result<Self> {
        let source_url = config.source_url()?;

        let timeout = config.timeout();
        ensure!(!timeout.is_zero(), "Timeout must be at least 1 second");
        let fetcher = Fetcher::new(Arc::new(http_client), timeout);

        Ok(Self {
            config,
            source_url,
            fetcher,
        })
    }
}
