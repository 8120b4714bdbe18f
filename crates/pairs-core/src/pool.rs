//! Pool address derivation for constant-product AMM factories.

use alloy::primitives::{keccak256, Address, B256};
use pairs_config::PoolSettings;
use pairs_types::{PairsError, Result, TokenPair};
use std::str::FromStr;

/// Computes the CREATE2 address a factory deploys a pair's pool at.
#[derive(Debug, Clone, Copy)]
pub struct PoolAddressDeriver {
	factory: Address,
	init_code_hash: B256,
}

impl PoolAddressDeriver {
	pub fn new(factory: Address, init_code_hash: B256) -> Self {
		Self {
			factory,
			init_code_hash,
		}
	}

	pub fn from_settings(settings: &PoolSettings) -> Result<Self> {
		let factory = Address::from_str(&settings.factory).map_err(|e| PairsError::InvalidAddress {
			address: settings.factory.clone(),
			reason: e.to_string(),
		})?;
		let init_code_hash = B256::from_str(&settings.init_code_hash)
			.map_err(|e| PairsError::Config(format!("invalid init code hash: {}", e)))?;
		Ok(Self::new(factory, init_code_hash))
	}

	pub fn factory(&self) -> Address {
		self.factory
	}

	/// Pool address of `pair`. Tokens are sorted by address first, so both
	/// orientations of a pair map to the same pool.
	pub fn pair_address(&self, pair: &TokenPair) -> Result<Address> {
		let a = pair.first().address.to_address()?;
		let b = pair.second().address.to_address()?;
		let (token0, token1) = if a < b { (a, b) } else { (b, a) };

		let salt = keccak256([token0.as_slice(), token1.as_slice()].concat());
		Ok(self.factory.create2(salt, self.init_code_hash))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::{address, b256};
	use pairs_types::Token;

	fn uniswap_v2() -> PoolAddressDeriver {
		PoolAddressDeriver::new(
			address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f"),
			b256!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"),
		)
	}

	fn weth() -> Token {
		Token::new("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18, "WETH")
	}

	fn usdc() -> Token {
		Token::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6, "USDC")
	}

	#[test]
	fn test_weth_usdc_pool() {
		let pair = TokenPair::new(weth(), usdc()).unwrap();
		assert_eq!(
			uniswap_v2().pair_address(&pair).unwrap(),
			address!("B4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc")
		);
	}

	#[test]
	fn test_orientation_does_not_matter() {
		let deriver = uniswap_v2();
		let forward = TokenPair::new(weth(), usdc()).unwrap();
		let backward = TokenPair::new(usdc(), weth()).unwrap();
		assert_eq!(
			deriver.pair_address(&forward).unwrap(),
			deriver.pair_address(&backward).unwrap()
		);
	}

	#[test]
	fn test_invalid_token_address() {
		let pair = TokenPair::new(weth(), Token::new("0x1234", 18, "BAD")).unwrap();
		assert!(matches!(
			uniswap_v2().pair_address(&pair),
			Err(PairsError::InvalidAddress { .. })
		));
	}

	#[test]
	fn test_from_settings() {
		let settings = PoolSettings {
			factory: "0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f".to_string(),
			init_code_hash: "0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f"
				.to_string(),
		};
		let deriver = PoolAddressDeriver::from_settings(&settings).unwrap();
		assert_eq!(deriver.factory(), uniswap_v2().factory());

		let bad = PoolSettings {
			init_code_hash: "0x1234".to_string(),
			..settings
		};
		assert!(PoolAddressDeriver::from_settings(&bad).is_err());
	}
}
