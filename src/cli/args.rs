//! CLI argument definitions using clap
//!
//! Commands:
//! - coursedb serve [--config <path>] [--host <host>] [--port <port>] [--strict] [--id-strategy <s>]
//! - coursedb check-config [--config <path>]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::courses::IdStrategy;

/// coursedb - An in-memory course catalog over HTTP
#[derive(Parser, Debug)]
#[command(name = "coursedb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Validate a configuration file and print the resolved settings
    CheckConfig {
        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Options for `serve`. Flags override values from the config file.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(long)]
    pub port: Option<u16>,

    /// Answer misses with 404 and bad bodies with 400
    #[arg(long)]
    pub strict: bool,

    /// Id strategy for created courses: uuid, counter or random
    #[arg(long)]
    pub id_strategy: Option<IdStrategy>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
