//! Configuration types for the pairs service.

use pairs_types::Network;
use serde::{Deserialize, Serialize};

/// Complete service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PairsConfig {
	/// Service identity and listener settings
	pub service: ServiceSettings,
	/// Network whose token list is active
	#[serde(default)]
	pub network: Network,
	/// Per-network token lists and base sets
	pub networks: NetworksConfig,
}

/// Service identity and listener settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceSettings {
	/// Service name for logging
	pub name: String,
	/// Bind host for the HTTP API
	#[serde(default = "default_host")]
	pub host: String,
	/// Port for the HTTP API
	pub http_port: u16,
	/// Log level
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

fn default_host() -> String {
	"0.0.0.0".to_string()
}

fn default_log_level() -> String {
	"info".to_string()
}

/// Settings for each supported network
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NetworksConfig {
	pub mainnet: Option<NetworkSettings>,
	pub testnet: Option<NetworkSettings>,
}

impl NetworksConfig {
	pub fn get(&self, network: Network) -> Option<&NetworkSettings> {
		match network {
			Network::Mainnet => self.mainnet.as_ref(),
			Network::Testnet => self.testnet.as_ref(),
		}
	}

	pub fn get_mut(&mut self, network: Network) -> Option<&mut NetworkSettings> {
		match network {
			Network::Mainnet => self.mainnet.as_mut(),
			Network::Testnet => self.testnet.as_mut(),
		}
	}

	/// Configured networks with their settings.
	pub fn iter(&self) -> impl Iterator<Item = (Network, &NetworkSettings)> {
		[
			(Network::Mainnet, self.mainnet.as_ref()),
			(Network::Testnet, self.testnet.as_ref()),
		]
		.into_iter()
		.filter_map(|(network, settings)| settings.map(|s| (network, s)))
	}
}

/// Token list and routing settings of one network
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkSettings {
	/// Chain id the addresses belong to
	pub chain_id: u64,
	/// The chain's gas asset, priced through its wrapped form
	pub native: TokenSettings,
	/// Symbol of the wrapped native token in `tokens`
	pub wrapped_native: String,
	/// Symbols of the intermediary tokens routes may hop through
	pub base_tokens: Vec<String>,
	/// Token registry
	pub tokens: Vec<TokenSettings>,
	/// Pool factory used to derive pair addresses (optional)
	pub pool: Option<PoolSettings>,
}

/// A token registry entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenSettings {
	pub symbol: String,
	pub address: String,
	pub decimals: u8,
}

impl TokenSettings {
	fn new(symbol: &str, address: &str, decimals: u8) -> Self {
		Self {
			symbol: symbol.to_string(),
			address: address.to_string(),
			decimals,
		}
	}
}

/// CREATE2 parameters of a constant-product pool factory
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PoolSettings {
	/// Factory contract address
	pub factory: String,
	/// keccak256 of the pair contract creation code
	pub init_code_hash: String,
}

const NATIVE_PLACEHOLDER: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
const UNISWAP_V2_FACTORY: &str = "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f";
const UNISWAP_V2_INIT_CODE_HASH: &str =
	"0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f";

impl PairsConfig {
	/// Settings of the active network
	pub fn active_network(&self) -> Option<&NetworkSettings> {
		self.networks.get(self.network)
	}
}

/// Default configuration
impl Default for PairsConfig {
	fn default() -> Self {
		Self {
			service: ServiceSettings {
				name: "swap-pairs".to_string(),
				host: default_host(),
				http_port: 3000,
				log_level: default_log_level(),
			},
			network: Network::Mainnet,
			networks: NetworksConfig {
				mainnet: Some(NetworkSettings::mainnet()),
				testnet: Some(NetworkSettings::testnet()),
			},
		}
	}
}

/// Built-in token lists
impl NetworkSettings {
	/// Ethereum mainnet with Uniswap V2 pools
	pub fn mainnet() -> Self {
		Self {
			chain_id: Network::Mainnet.default_chain_id(),
			native: TokenSettings::new("ETH", NATIVE_PLACEHOLDER, 18),
			wrapped_native: "WETH".to_string(),
			base_tokens: ["WETH", "UNI", "USDC", "USDT", "WBTC"]
				.iter()
				.map(|s| s.to_string())
				.collect(),
			tokens: vec![
				TokenSettings::new("WETH", "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18),
				TokenSettings::new("UNI", "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984", 18),
				TokenSettings::new("USDC", "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6),
				TokenSettings::new("USDT", "0xdAC17F958D2ee523a2206206994597C13D831ec7", 6),
				TokenSettings::new("WBTC", "0x2260FAC5E5542a773Aa44fBCfeDf7C193bc2C599", 8),
				TokenSettings::new("DAI", "0x6B175474E89094C44Da98b954EedeAC495271d0F", 18),
			],
			pool: Some(PoolSettings {
				factory: UNISWAP_V2_FACTORY.to_string(),
				init_code_hash: UNISWAP_V2_INIT_CODE_HASH.to_string(),
			}),
		}
	}

	/// Goerli test network
	pub fn testnet() -> Self {
		Self {
			chain_id: Network::Testnet.default_chain_id(),
			native: TokenSettings::new("ETH", NATIVE_PLACEHOLDER, 18),
			wrapped_native: "WETH".to_string(),
			base_tokens: ["WETH", "USDT", "UNI"].iter().map(|s| s.to_string()).collect(),
			tokens: vec![
				TokenSettings::new("WETH", "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6", 18),
				TokenSettings::new("USDT", "0xC2C527C0CACF457746Bd31B2a698Fe89de2b6d49", 6),
				TokenSettings::new("UNI", "0x1f9840a85d5aF5bf1D1762F925BDADdC4201F984", 18),
			],
			pool: Some(PoolSettings {
				factory: UNISWAP_V2_FACTORY.to_string(),
				init_code_hash: UNISWAP_V2_INIT_CODE_HASH.to_string(),
			}),
		}
	}

	/// Finds a registry entry by symbol, ignoring case.
	pub fn token(&self, symbol: &str) -> Option<&TokenSettings> {
		self.tokens
			.iter()
			.find(|t| t.symbol.eq_ignore_ascii_case(symbol))
	}
}
