//! CLI command implementations

use crate::http_server::{HttpServer, HttpServerConfig, PORT_ENV};
use crate::observability::{log_event_with_fields, Event};

use super::args::{Cli, Command, ServerArgs};
use super::errors::{CliError, CliResult};
use super::io::write_json;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.into_command())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Start(args) => start(&args),
        Command::Config(args) => show_config(&args),
    }
}

/// Resolve configuration from file, `PORT` and flags
pub fn resolve_config(args: &ServerArgs) -> CliResult<HttpServerConfig> {
    let env_port = std::env::var(PORT_ENV).ok();
    let config =
        HttpServerConfig::resolve(args.config.as_deref(), env_port.as_deref(), args.overrides())?;
    Ok(config)
}

/// Start the HTTP server and block until it stops
pub fn start(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    log_event_with_fields(
        Event::ConfigResolved,
        &[
            ("addr", config.socket_addr().as_str()),
            ("static_dir", config.static_dir.display().to_string().as_str()),
        ],
    );

    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            log_event_with_fields(Event::ServerFailed, &[("error", e.to_string().as_str())]);
            CliError::boot_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Print the resolved configuration. Writes nothing else to stdout.
pub fn show_config(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    write_json(&config)
}
