//! Native asset wrapping.
//!
//! AMM pools never hold the chain's gas asset directly, only its wrapped
//! ERC-20 form, so ETH is priced as WETH.

use pairs_types::{Token, TokenAddress};

#[derive(Debug, Clone)]
pub struct NativeWrapper {
	native: Token,
	wrapped: Token,
}

impl NativeWrapper {
	pub fn new(native: Token, wrapped: Token) -> Self {
		Self { native, wrapped }
	}

	pub fn wrapped(&self) -> &Token {
		&self.wrapped
	}

	pub fn is_native(&self, address: &TokenAddress) -> bool {
		&self.native.address == address
	}

	/// The wrapped token for the native asset, any other token unchanged.
	pub fn wrap(&self, token: &Token) -> Token {
		if self.is_native(&token.address) {
			self.wrapped.clone()
		} else {
			token.clone()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn wrapper() -> NativeWrapper {
		NativeWrapper::new(
			Token::new("0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE", 18, "ETH"),
			Token::new("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2", 18, "WETH"),
		)
	}

	#[test]
	fn test_native_is_wrapped() {
		let wrapper = wrapper();
		let eth = Token::new("0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee", 18, "ETH");
		assert_eq!(wrapper.wrap(&eth).symbol, "WETH");
	}

	#[test]
	fn test_other_tokens_unchanged() {
		let wrapper = wrapper();
		let usdc = Token::new("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6, "USDC");
		let wrapped = wrapper.wrap(&usdc);
		assert_eq!(wrapped, usdc);
		assert_eq!(wrapped.symbol, "USDC");
		assert_eq!(wrapper.wrap(wrapper.wrapped()).symbol, "WETH");
	}
}
