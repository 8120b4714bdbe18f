//! Token value types.

use crate::errors::{PairsError, Result};
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Case-normalized account identifier of a token.
///
/// The raw string is trimmed and lower-cased on construction, so two
/// spellings of the same hex address compare equal. An empty value is
/// allowed and marks a malformed token that never pairs with anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct TokenAddress(String);

impl TokenAddress {
	pub fn new(raw: impl AsRef<str>) -> Self {
		Self(raw.as_ref().trim().to_ascii_lowercase())
	}

	/// Parses a 20-byte hex account, rejecting anything else.
	pub fn parse(raw: &str) -> Result<Self> {
		let address = Address::from_str(raw.trim()).map_err(|e| PairsError::InvalidAddress {
			address: raw.to_string(),
			reason: e.to_string(),
		})?;
		Ok(Self::from(address))
	}

	/// Whether a user-supplied query should be treated as an address rather
	/// than a symbol.
	pub fn looks_like_address(raw: &str) -> bool {
		let raw = raw.trim();
		raw.len() > 2 && (raw.starts_with("0x") || raw.starts_with("0X"))
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn to_address(&self) -> Result<Address> {
		Address::from_str(&self.0).map_err(|e| PairsError::InvalidAddress {
			address: self.0.clone(),
			reason: e.to_string(),
		})
	}
}

impl From<Address> for TokenAddress {
	fn from(address: Address) -> Self {
		Self(format!("{:#x}", address))
	}
}

impl From<String> for TokenAddress {
	fn from(raw: String) -> Self {
		Self::new(raw)
	}
}

impl From<&str> for TokenAddress {
	fn from(raw: &str) -> Self {
		Self::new(raw)
	}
}

impl From<TokenAddress> for String {
	fn from(address: TokenAddress) -> Self {
		address.0
	}
}

impl fmt::Display for TokenAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A tradable asset.
///
/// Identity is the normalized address alone; `symbol` and `decimals` are
/// display data and take no part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
	pub address: TokenAddress,
	pub decimals: u8,
	pub symbol: String,
}

impl Token {
	pub fn new(address: impl Into<TokenAddress>, decimals: u8, symbol: impl Into<String>) -> Self {
		Self {
			address: address.into(),
			decimals,
			symbol: symbol.into(),
		}
	}

	/// A token without an address cannot be paired.
	pub fn is_missing(&self) -> bool {
		self.address.is_empty()
	}

	pub fn same_as(&self, other: &Token) -> bool {
		self.address == other.address
	}
}

impl PartialEq for Token {
	fn eq(&self, other: &Self) -> bool {
		self.address == other.address
	}
}

impl Eq for Token {}

impl Hash for Token {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.address.hash(state);
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({})", self.symbol, self.address)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::primitives::address;

	#[test]
	fn test_address_normalization() {
		let upper = TokenAddress::new("  0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2 ");
		let lower = TokenAddress::new("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
		assert_eq!(upper, lower);
		assert_eq!(upper.as_str(), "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
	}

	#[test]
	fn test_address_from_alloy() {
		let weth = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
		let normalized = TokenAddress::from(weth);
		assert_eq!(normalized.as_str(), "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
		assert_eq!(normalized.to_address().unwrap(), weth);
	}

	#[test]
	fn test_address_parse_rejects_garbage() {
		assert!(TokenAddress::parse("0x1234").is_err());
		assert!(TokenAddress::parse("not-an-address").is_err());
		assert!(TokenAddress::parse("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48").is_ok());
	}

	#[test]
	fn test_looks_like_address() {
		assert!(TokenAddress::looks_like_address("0xabc"));
		assert!(!TokenAddress::looks_like_address("0x"));
		assert!(!TokenAddress::looks_like_address("USDC"));
	}

	#[test]
	fn test_token_identity_ignores_display_fields() {
		let a = Token::new("0xAAAA", 18, "AAA");
		let b = Token::new("0xaaaa", 6, "Other");
		assert_eq!(a, b);
		assert!(a.same_as(&b));
		assert!(!a.is_missing());
		assert!(Token::new("", 18, "BROKEN").is_missing());
	}

	#[test]
	fn test_token_deserializes_and_normalizes() {
		let token: Token = serde_json::from_str(
			r#"{"address":"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48","decimals":6,"symbol":"USDC"}"#,
		)
		.unwrap();
		assert_eq!(token.address.as_str(), "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
		assert_eq!(token.decimals, 6);
	}
}
