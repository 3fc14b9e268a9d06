//! CLI module for coursedb
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - check-config: Validate and print a configuration file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServeArgs};
pub use commands::{check_config, load_config, resolve_serve_config, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
