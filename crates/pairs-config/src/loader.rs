//! Configuration loading from files and environment.
//!
//! Every entry point that reads the environment has a `*_with` variant
//! taking the variable lookup as a closure; the plain variants pass
//! [`process_env`].

use crate::types::*;
use alloy::primitives::{Address, B256};
use anyhow::{Context, Result};
use pairs_types::{Network, TokenAddress};
use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Files searched, relative to the working directory, when `CONFIG_FILE`
/// is not set.
pub const CONFIG_SEARCH_PATHS: [&str; 2] = ["config.toml", "config/pairs.toml"];

/// Looks a variable up in the process environment.
pub fn process_env(name: &str) -> Option<String> {
	std::env::var(name).ok()
}

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<PairsConfig> {
		Self::from_file_with(path, process_env)
	}

	/// Load configuration from file, resolving placeholders and overrides
	/// through `env`.
	pub fn from_file_with<P, F>(path: P, env: F) -> Result<PairsConfig>
	where
		P: AsRef<Path>,
		F: Fn(&str) -> Option<String>,
	{
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		let raw = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {:?}", path))?;
		let contents = substitute_vars(&raw, &env)?;

		let mut config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => anyhow::bail!("Unsupported config format: {:?}", path),
		};

		Self::apply_env_overrides(&mut config, &env)?;
		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<PairsConfig> {
		toml::from_str(contents).map_err(|e| anyhow::anyhow!("Failed to parse TOML: {}", e))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<PairsConfig> {
		serde_json::from_str(contents).context("Failed to parse JSON")
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<PairsConfig> {
		serde_yaml::from_str(contents).context("Failed to parse YAML")
	}

	/// Load from a file when given, else from the built-in defaults. Env
	/// overrides apply either way.
	pub fn from_env_and_file<F>(file_path: Option<&Path>, env: F) -> Result<PairsConfig>
	where
		F: Fn(&str) -> Option<String>,
	{
		match file_path {
			Some(path) => Self::from_file_with(path, env),
			None => {
				let mut config = PairsConfig::default();
				Self::apply_env_overrides(&mut config, &env)?;
				Self::validate_config(&config)?;
				Ok(config)
			}
		}
	}

	/// Apply `PAIRS_*` environment overrides
	pub fn apply_env_overrides<F>(config: &mut PairsConfig, env: F) -> Result<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(network) = env("PAIRS_NETWORK") {
			debug!("Overriding network from environment");
			config.network = Network::from_str(&network)
				.map_err(|e| anyhow::anyhow!("Invalid PAIRS_NETWORK: {}", e))?;
		}

		if let Some(host) = env("PAIRS_HOST") {
			debug!("Overriding HTTP host from environment");
			config.service.host = host;
		}

		if let Some(port) = env("PAIRS_HTTP_PORT") {
			debug!("Overriding HTTP port from environment");
			config.service.http_port = port
				.parse()
				.with_context(|| format!("Invalid PAIRS_HTTP_PORT: {}", port))?;
		}

		if let Some(log_level) = env("PAIRS_LOG_LEVEL") {
			config.service.log_level = log_level;
		}

		Ok(())
	}

	/// Validate configuration
	pub fn validate_config(config: &PairsConfig) -> Result<()> {
		if config.service.http_port == 0 {
			anyhow::bail!("http_port must be non-zero");
		}

		if config.active_network().is_none() {
			anyhow::bail!("Network '{}' selected but not configured", config.network);
		}

		for (network, settings) in config.networks.iter() {
			Self::validate_network(network, settings)?;
		}

		Ok(())
	}

	fn validate_network(network: Network, settings: &NetworkSettings) -> Result<()> {
		TokenAddress::parse(&settings.native.address)
			.with_context(|| format!("[{}] native token {}", network, settings.native.symbol))?;

		for token in &settings.tokens {
			TokenAddress::parse(&token.address)
				.with_context(|| format!("[{}] token {}", network, token.symbol))?;
		}

		if settings.token(&settings.wrapped_native).is_none() {
			anyhow::bail!(
				"[{}] wrapped native token '{}' not in token list",
				network,
				settings.wrapped_native
			);
		}

		let mut seen = HashSet::new();
		for symbol in &settings.base_tokens {
			if settings.token(symbol).is_none() {
				anyhow::bail!("[{}] base token '{}' not in token list", network, symbol);
			}
			if !seen.insert(symbol.to_ascii_uppercase()) {
				warn!("[{}] base token '{}' listed more than once", network, symbol);
			}
		}

		if let Some(pool) = &settings.pool {
			Address::from_str(&pool.factory)
				.with_context(|| format!("[{}] invalid pool factory address", network))?;
			B256::from_str(&pool.init_code_hash)
				.with_context(|| format!("[{}] invalid pool init code hash", network))?;
		}

		Ok(())
	}
}

/// Replaces `${VAR_NAME}` placeholders using `lookup`. Lines starting with
/// `#` are comments and left untouched; a placeholder with no value
/// anywhere else is an error.
pub fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
where
	F: Fn(&str) -> Option<String>,
{
	let re = Regex::new(r"\$\{([^}]+)\}").context("Invalid placeholder pattern")?;

	let lines = content
		.split_inclusive('\n')
		.map(|line| -> Result<String> {
			if line.trim_start().starts_with('#') {
				return Ok(line.to_string());
			}

			let mut replaced = line.to_string();
			for cap in re.captures_iter(line) {
				let value = lookup(&cap[1])
					.with_context(|| format!("Environment variable not found: {}", &cap[1]))?;
				replaced = replaced.replace(&cap[0], &value);
			}
			Ok(replaced)
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(lines.concat())
}

/// The config file to load: `CONFIG_FILE` when set, else the first of
/// [`CONFIG_SEARCH_PATHS`] that exists under `root`.
pub fn locate_config<F>(root: &Path, env: F) -> Option<PathBuf>
where
	F: Fn(&str) -> Option<String>,
{
	if let Some(path) = env("CONFIG_FILE") {
		return Some(PathBuf::from(path));
	}

	CONFIG_SEARCH_PATHS
		.iter()
		.map(|relative| root.join(relative))
		.find(|candidate| candidate.exists())
}

/// Load configuration from standard locations, falling back to the
/// built-in defaults.
pub fn load_config() -> Result<PairsConfig> {
	let path = locate_config(Path::new("."), process_env);
	ConfigLoader::from_env_and_file(path.as_deref(), process_env)
}
