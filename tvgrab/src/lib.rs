mod app_state;
mod config;
pub use app_state::*;
pub use config::*;
pub mod errors;
pub mod job;
pub mod logging;
pub mod transfer;

#[cfg(test)]
mod test_support;
