//! CLI module for the book tracker
//!
//! - start: resolve configuration and serve the API and UI
//! - config: print the resolved configuration

mod args;
mod commands;
mod errors;
mod io;

pub use commands::run;
pub use errors::{CliError, CliResult};
