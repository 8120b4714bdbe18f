//! Resolve, wrap, pair, and derive pool addresses in one call.

use crate::{
	combinations::CombinationGenerator, pool::PoolAddressDeriver, registry::TokenRegistry,
	wrap::NativeWrapper,
};
use alloy::primitives::Address;
use pairs_config::{NetworkSettings, PairsConfig};
use pairs_types::{
	BaseTokenSet, Network, PairView, PairsError, PairsResponse, Result, Token, TokenAddress,
	TokenPair, TokensResponse,
};
use tracing::{debug, info, instrument};

/// A produced pair together with its derived pool address.
#[derive(Debug, Clone)]
pub struct ResolvedPair {
	pub pair: TokenPair,
	pub pool_address: Option<Address>,
}

/// Output of [`PairsEngine::combinations`].
#[derive(Debug, Clone)]
pub struct PairCombinations {
	pub network: Network,
	pub chain_id: u64,
	pub from: Token,
	pub to: Token,
	pub pairs: Vec<ResolvedPair>,
}

/// Token pairing for the active network.
pub struct PairsEngine {
	network: Network,
	chain_id: u64,
	registry: TokenRegistry,
	wrapper: NativeWrapper,
	generator: CombinationGenerator,
	pools: Option<PoolAddressDeriver>,
}

impl PairsEngine {
	/// Builds the engine for the network selected in `config`.
	pub fn from_config(config: &PairsConfig) -> Result<Self> {
		let settings = config
			.active_network()
			.ok_or(PairsError::NetworkNotConfigured(config.network))?;
		Self::from_settings(config.network, settings)
	}

	pub fn from_settings(network: Network, settings: &NetworkSettings) -> Result<Self> {
		let native = Token::new(
			TokenAddress::parse(&settings.native.address)?,
			settings.native.decimals,
			settings.native.symbol.clone(),
		);

		let registry = TokenRegistry::from_settings(
			settings.tokens.iter().chain(std::iter::once(&settings.native)),
		)?;

		let wrapped = registry
			.by_symbol(&settings.wrapped_native)
			.cloned()
			.ok_or_else(|| {
				PairsError::Config(format!(
					"wrapped native token '{}' not in token list",
					settings.wrapped_native
				))
			})?;

		let bases = registry.base_set(&settings.base_tokens);
		let pools = settings
			.pool
			.as_ref()
			.map(PoolAddressDeriver::from_settings)
			.transpose()?;

		info!(
			"Pairs engine ready for {} (chain {}): {} tokens, {} base tokens",
			network,
			settings.chain_id,
			registry.len(),
			bases.len()
		);

		Ok(Self {
			network,
			chain_id: settings.chain_id,
			registry,
			wrapper: NativeWrapper::new(native, wrapped),
			generator: CombinationGenerator::new(bases),
			pools,
		})
	}

	pub fn network(&self) -> Network {
		self.network
	}

	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	pub fn base_tokens(&self) -> &BaseTokenSet {
		self.generator.bases()
	}

	/// Resolves a symbol or address and wraps the native asset.
	pub fn resolve(&self, query: &str) -> Result<Token> {
		let token = self.registry.resolve(query)?;
		Ok(self.wrapper.wrap(&token))
	}

	/// All pairs to check when pricing `from -> to`.
	#[instrument(skip(self), fields(network = %self.network))]
	pub fn combinations(&self, from: &str, to: &str) -> Result<PairCombinations> {
		let from = self.resolve(from)?;
		let to = self.resolve(to)?;
		debug!("Generating pairs for {} -> {}", from, to);

		let pairs = self
			.generator
			.generate(&from, &to)
			.into_iter()
			.map(|pair| -> Result<ResolvedPair> {
				let pool_address = match &self.pools {
					Some(pools) => Some(pools.pair_address(&pair)?),
					None => None,
				};
				Ok(ResolvedPair { pair, pool_address })
			})
			.collect::<Result<Vec<_>>>()?;

		info!("{} -> {}: {} pairs", from.symbol, to.symbol, pairs.len());

		Ok(PairCombinations {
			network: self.network,
			chain_id: self.chain_id,
			from,
			to,
			pairs,
		})
	}

	pub fn tokens(&self) -> TokensResponse {
		TokensResponse {
			network: self.network,
			chain_id: self.chain_id,
			base_tokens: self.base_tokens().as_slice().to_vec(),
			tokens: self.registry.tokens().to_vec(),
		}
	}
}

impl From<PairCombinations> for PairsResponse {
	fn from(combinations: PairCombinations) -> Self {
		let pairs: Vec<PairView> = combinations
			.pairs
			.into_iter()
			.map(|resolved| {
				let (token0, token1) = resolved.pair.sorted();
				PairView {
					token0: token0.clone(),
					token1: token1.clone(),
					pool_address: resolved.pool_address.map(|a| a.to_checksum(None)),
				}
			})
			.collect();

		PairsResponse {
			network: combinations.network,
			chain_id: combinations.chain_id,
			from: combinations.from,
			to: combinations.to,
			count: pairs.len(),
			pairs,
		}
	}
}
