//! CLI argument definitions using clap
//!
//! Commands:
//! - book-tracker [start] [--config <path>] [--port <n>] [--host <h>] [--static-dir <dir>]
//! - book-tracker config  [same flags]

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::http_server::ConfigOverrides;

/// Book tracker - REST API and UI for a reading list
#[derive(Parser, Debug)]
#[command(name = "book-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults to `start`
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Start(ServerArgs),

    /// Print the resolved configuration as JSON and exit
    Config(ServerArgs),
}

/// Flags shared by every command
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Port to listen on (overrides PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Directory holding index.html and the UI assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl ServerArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            static_dir: self.static_dir.clone(),
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// The command to run, `start` when none was given
    pub fn into_command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::Start(ServerArgs::default()))
    }
}
