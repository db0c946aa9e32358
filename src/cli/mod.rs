//! Command line interface for tag_release.
//!
//! Argument parsing, colored output, and execution of the release command.

mod args;
pub mod commands;
mod output;
mod timeout_config;

pub use args::{Args, RuntimeConfig};
pub use commands::execute_command;
pub use output::{MAX_LISTED_PATHS, OutputManager};
pub use timeout_config::{
    DEFAULT_NETWORK_SECS, MAX_NETWORK_SECS, TIMEOUT_ENV_VAR, TimeoutConfig,
};

use crate::error::Result;

/// Run with already parsed arguments
pub async fn run(args: Args) -> Result<i32> {
    execute_command(args).await
}

/// Parse arguments without executing
pub fn parse_args() -> Args {
    Args::parse_args()
}
