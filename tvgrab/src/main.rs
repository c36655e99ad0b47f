use std::{env, process::ExitCode, sync::Arc};

use anyhow::Result;
use log::{Level, error, info, log_enabled};
use tvgrab_rs::{AppState, errors::RunError, job::run_once, load_config_or_default, logging};

async fn app_entry() -> Result<()> {
    let config_path = env::var("TVGRAB_CONFIG_PATH").unwrap_or_else(|_| "config.yml".into());
    let config = load_config_or_default(&config_path)?;

    logging::init_logging(config.log_path())?;
    info!("Config path: {}", config_path);

    let app_state = Arc::new(AppState::new(config)?);
    run_once(&app_state).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match app_entry().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // run errors are logged where they happen
            if e.downcast_ref::<RunError>().is_none() {
                if log_enabled!(Level::Error) {
                    error!("Fatal error: {:#}", e);
                } else {
                    eprintln!("Fatal error: {:#}", e);
                }
            }
            ExitCode::FAILURE
        }
    }
}
