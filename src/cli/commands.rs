//! CLI command implementations
//!
//! Configuration is resolved once: defaults, then the optional JSON file,
//! then command-line flags.

use std::io::{self, Write};
use std::path::Path;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::{Command, ServeArgs};
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve(args) => serve(args),
        Command::CheckConfig { config } => check_config(config.as_deref()),
    }
}

/// Load the config file if given, else defaults
pub fn load_config(path: Option<&Path>) -> CliResult<HttpServerConfig> {
    let config = match path {
        Some(path) => {
            let config = HttpServerConfig::load(path)?;
            Logger::info("CONFIG_LOADED", &[("path", path.display().to_string().as_str())]);
            config
        }
        None => HttpServerConfig::default(),
    };
    Ok(config)
}

/// Apply `serve` flags on top of a loaded config
pub fn resolve_serve_config(args: &ServeArgs) -> CliResult<HttpServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.strict {
        config.strict_mode = true;
    }
    if let Some(strategy) = args.id_strategy {
        config.id_strategy = strategy;
    }
    config.validate()?;
    Ok(config)
}

/// Start the server and block until it stops
pub fn serve(args: ServeArgs) -> CliResult<()> {
    let config = resolve_serve_config(&args)?;
    Logger::set_min_severity(config.severity()?);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(async move {
        HttpServer::with_config(config)
            .start()
            .await
            .map_err(|e| CliError::serve_failed(e.to_string()))
    })
}

/// Validate the config and print it as JSON
pub fn check_config(path: Option<&Path>) -> CliResult<()> {
    let config = load_config(path)?;
    config.validate()?;
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courses::IdStrategy;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = resolve_serve_config(&ServeArgs::default()).unwrap();
        assert_eq!(config, HttpServerConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"host": "127.0.0.1", "port": 9000, "id_strategy": "random"}"#)
            .unwrap();

        let args = ServeArgs {
            config: Some(file.path().to_path_buf()),
            port: Some(9100),
            strict: true,
            id_strategy: Some(IdStrategy::Counter),
            ..Default::default()
        };
        let config = resolve_serve_config(&args).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9100);
        assert!(config.strict_mode);
        assert_eq!(config.id_strategy, IdStrategy::Counter);
    }

    #[test]
    fn test_zero_port_flag_rejected() {
        let args = ServeArgs {
            port: Some(0),
            ..Default::default()
        };
        assert!(resolve_serve_config(&args).is_err());
    }

    #[test]
    fn test_check_config_missing_file() {
        let err = check_config(Some(Path::new("/nonexistent/coursedb.json"))).unwrap_err();
        assert_eq!(err.code(), &crate::cli::CliErrorCode::ConfigError);
    }
}
