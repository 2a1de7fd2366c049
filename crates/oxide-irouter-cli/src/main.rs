//! irouter CLI
//!
//! Command-line tool for checking route files: match a request, generate a
//! URL or list the table.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde_json::{Value, json};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use oxide_irouter::{PathParams, Router, RouterConfig};

/// Match requests and generate URLs against a JSON route file.
#[derive(Parser)]
#[command(name = "irouter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Route file (JSON).
    #[arg(short, long, env = "IROUTER_ROUTES", default_value = "routes.json")]
    routes: PathBuf,

    /// Enable verbose output (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match a request and print the result as JSON.
    Match {
        /// HTTP method.
        method: String,

        /// Request URL (path plus optional query string).
        url: String,
    },

    /// Generate the URL of a named route.
    Generate {
        /// Route name.
        name: String,

        /// Parameter as key=value (repeatable).
        #[arg(short, long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },

    /// List the route table in priority order.
    Routes,
}

fn parse_param(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))
}

fn load(path: &Path) -> anyhow::Result<Router<Value>> {
    let router = RouterConfig::<Value>::from_path(path)
        .and_then(RouterConfig::into_router)
        .with_context(|| format!("loading routes from {}", path.display()))?;
    debug!(routes = router.routes().len(), "route table loaded");
    Ok(router)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let router = load(&cli.routes)?;

    match cli.command {
        Commands::Match { method, url } => match router.match_request(&method, &url) {
            Some(found) => {
                let output = json!({
                    "target": found.target,
                    "params": found.params,
                    "name": found.name,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            None => {
                println!("no match");
                return Ok(ExitCode::FAILURE);
            }
        },

        Commands::Generate { name, params } => {
            let params: PathParams = params.into_iter().collect();
            println!("{}", router.generate(&name, &params)?);
        }

        Commands::Routes => {
            for route in router.routes() {
                println!(
                    "{:<16} {:<40} {}",
                    route.method,
                    route.pattern,
                    route.name.as_deref().unwrap_or("-")
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
