use std::{error::Error, fmt::Display, io};

use crate::transfer::FetchError;

/// Failures that abort the run before anything is written
#[derive(Debug)]
pub enum RunError {
    Fetch(FetchError),
    CreateDir(io::Error),
    WriteOutput(io::Error),
}

impl Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fetch(e) => write!(f, "Failed to fetch playlist: {}", e),
            Self::CreateDir(e) => write!(f, "Failed to create output directory: {}", e),
            Self::WriteOutput(e) => write!(f, "Failed to write playlist: {}", e),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::CreateDir(e) | Self::WriteOutput(e) => Some(e),
        }
    }
}

impl From<FetchError> for RunError {
    fn from(value: FetchError) -> Self {
        Self::Fetch(value)
    }
}

#[macro_export]
macro_rules! something_with_error_log {
    ($position:expr, $wrap:expr) => {
        |e| {
            use log::error;

            error!("{}: {}", $position, e);
            $wrap(e)
        }
    };
}

/// Logs the error at the point of failure and lifts it into a [`RunError`] variant.
#[macro_export]
macro_rules! fatal_with_log {
    ($msg:expr, $variant:expr) => {{ $crate::something_with_error_log!($msg, $variant) }};
}

pub use fatal_with_log;
pub use something_with_error_log;
