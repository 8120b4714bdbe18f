//! Static token registry of one network.

use pairs_config::TokenSettings;
use pairs_types::{BaseTokenSet, PairsError, Result, Token, TokenAddress};
use std::collections::HashMap;
use tracing::warn;

/// Lookup of known tokens by address and by symbol.
#[derive(Debug, Clone, Default)]
pub struct TokenRegistry {
	tokens: Vec<Token>,
	by_address: HashMap<TokenAddress, usize>,
	by_symbol: HashMap<String, usize>,
}

impl TokenRegistry {
	/// Builds the registry. When two entries share an address or a symbol
	/// the first one wins.
	pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
		let mut registry = Self::default();
		for token in tokens {
			if registry.by_address.contains_key(&token.address) {
				warn!("Duplicate token address {} ignored", token.address);
				continue;
			}
			let index = registry.tokens.len();
			registry.by_address.insert(token.address.clone(), index);
			registry
				.by_symbol
				.entry(token.symbol.to_ascii_uppercase())
				.or_insert(index);
			registry.tokens.push(token);
		}
		registry
	}

	/// Builds the registry from configuration entries.
	pub fn from_settings<'a>(settings: impl IntoIterator<Item = &'a TokenSettings>) -> Result<Self> {
		let tokens = settings
			.into_iter()
			.map(|entry| -> Result<Token> {
				let address = TokenAddress::parse(&entry.address)?;
				Ok(Token::new(address, entry.decimals, entry.symbol.clone()))
			})
			.collect::<Result<Vec<_>>>()?;
		Ok(Self::from_tokens(tokens))
	}

	pub fn by_address(&self, address: &TokenAddress) -> Option<&Token> {
		self.by_address.get(address).map(|&i| &self.tokens[i])
	}

	pub fn by_symbol(&self, symbol: &str) -> Option<&Token> {
		self.by_symbol
			.get(&symbol.trim().to_ascii_uppercase())
			.map(|&i| &self.tokens[i])
	}

	/// Resolves a user query: hex-looking input is looked up as an address,
	/// anything else as a symbol. A `0x`-prefixed query that is not a valid
	/// address may still be a symbol such as `0xBTC`.
	pub fn resolve(&self, query: &str) -> Result<Token> {
		let unknown = || PairsError::UnknownToken(query.trim().to_string());

		if !TokenAddress::looks_like_address(query) {
			return self.by_symbol(query).cloned().ok_or_else(unknown);
		}

		match TokenAddress::parse(query) {
			Ok(address) => self.by_address(&address).cloned().ok_or_else(unknown),
			Err(err) => self.by_symbol(query).cloned().ok_or(err),
		}
	}

	/// Resolves configured base symbols in order. Unknown symbols are skipped.
	pub fn base_set(&self, symbols: &[String]) -> BaseTokenSet {
		symbols
			.iter()
			.filter_map(|symbol| {
				let token = self.by_symbol(symbol).cloned();
				if token.is_none() {
					warn!("Base token {} is not in the registry, skipping", symbol);
				}
				token
			})
			.collect()
	}

	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}
