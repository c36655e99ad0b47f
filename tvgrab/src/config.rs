use std::{
    fs::File,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Result;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/aseanic/aseanic.github.io/refs/heads/main/tv";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub source_url: Option<String>,
    /// Request timeout in seconds
    pub timeout: Option<u16>,
    pub output_dir: Option<PathBuf>,
    pub output_file: Option<String>,
    /// Relative to the output directory
    pub log_file: Option<String>,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConfig {
    pub user_agent: Option<String>,
    pub proxy: Option<String>,
}

impl Config {
    pub fn source_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(10).into()) // 10s
    }

    pub fn output_dir(&self) -> &Path {
        self.output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("playlists"))
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_dir().join(
            self.output_file
                .as_deref()
                .unwrap_or("extracted_playlist.m3u"),
        )
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir()
            .join(self.log_file.as_deref().unwrap_or("script.log"))
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let file = File::open(path.as_ref())?;
    let config: Config = serde_yaml::from_reader(file)?;
    Ok(config)
}

/// Like [`load_config`], but a missing file means built-in defaults.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config> {
    match path.as_ref().try_exists() {
        Ok(false) => Ok(Config::default()),
        _ => load_config(path),
    }
}
