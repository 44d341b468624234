//! databricks-mcp — MCP server for the Databricks REST API.
//!
//! Usage:
//!   databricks-mcp                 Serve MCP over stdio
//!   databricks-mcp --test          Run the startup self-check and exit
//!   databricks-mcp --verbose       Raise log verbosity to debug
//!
//! Configuration comes from ~/.databricks-mcp/config.toml plus the
//! DATABRICKS_HOST / DATABRICKS_TOKEN environment variables.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::info;

use databricks_mcp::config;
use databricks_mcp::databricks::ApiClient;
use databricks_mcp::server;
use databricks_mcp::tools::ToolRegistry;

#[derive(Parser, Debug)]
#[command(name = "databricks-mcp")]
#[command(version)]
#[command(about = "MCP server exposing Databricks REST APIs as agent tools")]
struct Cli {
    /// Run the startup self-check (config, client, tool catalog) and exit.
    #[arg(long)]
    test: bool,

    /// Log at debug level.
    #[arg(long, short)]
    verbose: bool,

    /// Path to the config file.
    #[arg(long, default_value = "~/.databricks-mcp/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = config::resolve_path(&cli.config);

    if cli.test {
        init_logging(if cli.verbose { "debug" } else { "info" });
        return run_self_check(&config_path);
    }

    let config = config::load_config(&config_path)?;
    let default_level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_logging(default_level);
    info!("Databricks host: {}", config.base_url());

    let client = ApiClient::new(&config)?;
    let registry = ToolRegistry::new(client);

    server::serve_stdio(registry).await
}

/// stdout belongs to the MCP transport; all logging goes to stderr.
/// DATABRICKS_MCP_LOG overrides the default level.
fn init_logging(default_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_env("DATABRICKS_MCP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Verify that the server can start: config loads, the HTTP client builds,
/// and the tool catalog is populated. Exits non-zero on the first failure.
fn run_self_check(config_path: &std::path::Path) -> Result<()> {
    println!("{}", "databricks-mcp self-check".bold());

    let config = match config::load_config(config_path) {
        Ok(config) => {
            println!("  {} config loaded ({})", "ok".green(), config.base_url());
            config
        }
        Err(err) => {
            println!("  {} config: {err:#}", "fail".red().bold());
            std::process::exit(1);
        }
    };

    let client = match ApiClient::new(&config) {
        Ok(client) => {
            println!("  {} HTTP client built", "ok".green());
            client
        }
        Err(err) => {
            println!("  {} HTTP client: {err:#}", "fail".red().bold());
            std::process::exit(1);
        }
    };

    let registry = ToolRegistry::new(client);
    if registry.is_empty() {
        println!("  {} tool catalog is empty", "fail".red().bold());
        std::process::exit(1);
    }
    println!("  {} {} tools registered", "ok".green(), registry.len());

    Ok(())
}
