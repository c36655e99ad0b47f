use std::path::PathBuf;

use log::{info, warn};
use playlist_rs::transcode;
use tokio::fs;

use crate::{AppStateRef, errors::RunError, fatal_with_log};

#[derive(Debug)]
pub struct RunSummary {
    pub emitted: usize,
    /// Malformed metadata lines that were skipped
    pub warnings: usize,
    pub output_path: PathBuf,
}

/// One full pass: fetch, transcode, overwrite the output file.
///
/// Nothing is written unless the fetch succeeded.
pub async fn run_once(state: &AppStateRef) -> Result<RunSummary, RunError> {
    let config = &state.config;
    info!(
        "Starting playlist extraction from {} (timeout {}s)",
        state.source_url,
        state.fetcher.timeout().as_secs()
    );

    fs::create_dir_all(config.output_dir())
        .await
        .map_err(fatal_with_log!("Create output directory", RunError::CreateDir))?;

    let text = state
        .fetcher
        .fetch(state.source_url.clone())
        .await
        .map_err(fatal_with_log!("Fetch playlist", RunError::Fetch))?;

    let result = transcode(&text);

    let output_path = config.output_path();
    fs::write(&output_path, result.document.to_string())
        .await
        .map_err(fatal_with_log!("Write playlist", RunError::WriteOutput))?;

    info!("Generated {} channel entries", result.emitted);
    if !result.warnings.is_empty() {
        warn!("Skipped {} malformed metadata lines", result.warnings.len());
    }
    info!(
        "M3U playlist generated successfully as '{}'",
        output_path.display()
    );

    Ok(RunSummary {
        emitted: result.emitted,
        warnings: result.warnings.len(),
        output_path,
    })
}
