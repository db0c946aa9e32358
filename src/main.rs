//! tag_release - tag a release and push it to trigger CI.

use std::process;
use tag_release::cli::{self, OutputManager};
use tag_release::error::EXIT_FAILURE;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::parse_args();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match cli::run(args).await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));

            let suggestions = e.recovery_suggestions();
            if !suggestions.is_empty() {
                let _ = output.println("\nRecovery suggestions:");
                for suggestion in suggestions {
                    let _ = output.indent(&suggestion);
                }
            }

            process::exit(EXIT_FAILURE);
        }
    }
}
