use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pairs_config::{load_config, ConfigLoader, PairsConfig};
use pairs_core::PairsEngine;
use pairs_types::PairsResponse;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;

#[derive(Parser)]
#[command(name = "swap-pairs")]
#[command(about = "Token pair generator for swap routing", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Configuration file; standard locations are searched when omitted
	#[arg(short, long, value_name = "FILE", global = true)]
	config: Option<PathBuf>,

	#[arg(long, env = "PAIRS_LOG_LEVEL", default_value = "info", global = true)]
	log_level: String,
}

#[derive(Subcommand)]
enum Commands {
	/// Start the HTTP API
	Start,
	/// Validate the configuration file
	Validate,
	/// Print the pairs to check for a trade
	Pairs {
		/// Source token symbol or address
		from: String,
		/// Destination token symbol or address
		to: String,
		/// Print JSON instead of a table
		#[arg(long)]
		json: bool,
	},
}

#[tokio::main]
async fn main() -> Result<()> {
	let cli = Cli::parse();

	init_logging(&cli.log_level)?;

	let config = load(&cli).context("Failed to load configuration")?;

	match cli.command {
		Some(Commands::Start) | None => start_service(config).await,
		Some(Commands::Validate) => validate_config(&config),
		Some(Commands::Pairs { from, to, json }) => print_pairs(&config, &from, &to, json),
	}
}

fn load(cli: &Cli) -> Result<PairsConfig> {
	match &cli.config {
		Some(path) => {
			info!("Loading configuration from: {:?}", path);
			ConfigLoader::from_file(path)
		}
		None => load_config(),
	}
}

async fn start_service(config: PairsConfig) -> Result<()> {
	info!("Starting {}", config.service.name);

	let engine = PairsEngine::from_config(&config).context("Failed to build pairs engine")?;
	info!(
		"Serving {} (chain {}) with {} base tokens",
		engine.network(),
		engine.chain_id(),
		engine.base_tokens().len()
	);
	let state = api::AppState {
		engine: Arc::new(engine),
	};

	api::serve(
		&config.service.host,
		config.service.http_port,
		state,
		shutdown_requested(),
	)
	.await?;

	info!("{} stopped", config.service.name);
	Ok(())
}

fn validate_config(config: &PairsConfig) -> Result<()> {
	info!("Configuration is valid");
	info!("Service name: {}", config.service.name);
	info!("Active network: {}", config.network);

	for (network, settings) in config.networks.iter() {
		info!(
			"  {} (chain {}): {} tokens, bases [{}]",
			network,
			settings.chain_id,
			settings.tokens.len(),
			settings.base_tokens.join(", ")
		);
	}

	// Building the engine resolves every base and the wrapped native token
	PairsEngine::from_config(config).context("Failed to build pairs engine")?;
	Ok(())
}

fn print_pairs(config: &PairsConfig, from: &str, to: &str, json: bool) -> Result<()> {
	let engine = PairsEngine::from_config(config).context("Failed to build pairs engine")?;
	let response: PairsResponse = engine.combinations(from, to)?.into();

	if json {
		println!("{}", serde_json::to_string_pretty(&response)?);
		return Ok(());
	}

	println!(
		"{} -> {} on {} ({} pairs)",
		response.from.symbol, response.to.symbol, response.network, response.count
	);
	for pair in &response.pairs {
		let pool = pair.pool_address.as_deref().unwrap_or("-");
		println!(
			"  {:<6} {:<6} {}",
			pair.token0.symbol, pair.token1.symbol, pool
		);
	}

	Ok(())
}

/// Logs go to stderr so `pairs --json` output stays parseable. `RUST_LOG`
/// wins over `--log-level` when set.
fn init_logging(log_level: &str) -> Result<()> {
	let filter = match EnvFilter::try_from_default_env() {
		Ok(filter) => filter,
		Err(_) => EnvFilter::try_new(log_level)
			.with_context(|| format!("Invalid log level: {}", log_level))?,
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.try_init()
		.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

/// Resolves on Ctrl+C, or SIGTERM on unix. A handler that cannot be
/// installed is logged and never fires.
async fn shutdown_requested() {
	let interrupt = async {
		if let Err(e) = signal::ctrl_c().await {
			error!("Cannot listen for Ctrl+C: {}", e);
			std::future::pending::<()>().await;
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut sigterm) => {
				sigterm.recv().await;
			}
			Err(e) => {
				error!("Cannot listen for SIGTERM: {}", e);
				std::future::pending::<()>().await;
			}
		}
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	tokio::select! {
		_ = interrupt => info!("Interrupted, shutting down"),
		_ = terminate => info!("Terminated, shutting down"),
	}
}
