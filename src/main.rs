//! Makai Router - Main entrypoint.
//!
//! This is the CLI for the Makai Router. It validates and generates
//! configuration files and offers an offline route-resolution command for
//! inspecting how a set of patterns matches a request path.

mod config;
mod data_structures;
mod error;
mod routing;
mod utils;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;

use error::{set_error_reporter, MakaiError, MakaiResult, TracingErrorReporter};
use routing::{HttpMethod, MethodHandlers, PathRouter, Route};

/// Command line arguments for the Makai Router.
#[derive(Parser, Debug)]
#[clap(name = "Makai Router", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,

        /// Output format (toml or json)
        #[clap(short, long, default_value = "toml")]
        format: String,
    },

    /// Register patterns and resolve a path against them
    Resolve {
        /// Route pattern to register (repeatable)
        #[clap(short, long = "route", required = true)]
        routes: Vec<String>,

        /// Request path to resolve
        #[clap(short, long)]
        path: String,

        /// HTTP method to look up on the matched handler set
        #[clap(short, long, default_value = "GET", value_parser = parse_method)]
        method: HttpMethod,
    },
}

fn parse_method(value: &str) -> Result<HttpMethod, String> {
    HttpMethod::from_str(value).map_err(|e| e.to_string())
}

/// Initialize the logging system.
fn init_logging() -> MakaiResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MakaiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> MakaiResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Set up error reporter
    set_error_reporter(Arc::new(TracingErrorReporter));

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let config_loader = config::ConfigLoader::new(args.config.as_deref(), "MAKAI");

    match args.command {
        Command::Validate => {
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output, format } => {
            info!("Generating default configuration");
            let default_config = config::MakaiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(MakaiError::Io)?;
            }

            let rendered = match format.as_str() {
                "toml" => toml::to_string_pretty(&default_config)
                    .map_err(|e| MakaiError::Custom(format!("Failed to serialize config: {e}")))?,
                "json" => serde_json::to_string_pretty(&default_config)?,
                other => {
                    return Err(MakaiError::Custom(format!(
                        "Unsupported config format: {other}"
                    )))
                }
            };
            std::fs::write(&output, rendered).map_err(MakaiError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Resolve {
            routes,
            path,
            method,
        } => {
            let routing_config = match config_loader.load() {
                Ok(config) => config.routing,
                Err(e) => {
                    tracing::error!("Configuration error: {}", e);
                    process::exit(1);
                }
            };

            let mut router = PathRouter::with_config(routing_config);
            let registrations = routes.into_iter().map(|pattern| {
                // Mark every verb so verb support reflects the pattern set,
                // not this tool's placeholder handlers.
                let handlers = MethodHandlers::new()
                    .with_get("handler")
                    .with_post("handler")
                    .with_put("handler")
                    .with_delete("handler");
                Route::new(pattern, handlers)
            });
            if let Err(e) = router.register_routes(registrations) {
                error::report_error(
                    error::ErrorContext::new(e.into(), "routing")
                        .with_details("while registering routes from the command line"),
                );
                process::exit(1);
            }

            let report = match router.resolve(&path) {
                Some(found) => json!({
                    "path": path,
                    "matched": true,
                    "method": method.as_str(),
                    "method_supported": found.handler_for(method).is_some(),
                    "args": found.args().as_slice(),
                }),
                None => json!({
                    "path": path,
                    "matched": false,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
