//! Command execution for the release workflow.
//!
//! Runs the release and turns its outcome into a process exit code,
//! printing the failing step and recovery suggestions on error.

mod release;

use crate::cli::{Args, RuntimeConfig};
use crate::error::{EXIT_FAILURE, Result};

use release::execute_release;

/// Execute the release described by parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Validation errors are shown even in quiet mode
        let output = super::OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(EXIT_FAILURE);
    }

    let config = RuntimeConfig::from(&args);

    match execute_release(&args, &config).await {
        Ok(exit_code) => Ok(exit_code),
        Err(e) => {
            config.output().release_failure(&e);
            Ok(e.exit_code())
        }
    }
}
