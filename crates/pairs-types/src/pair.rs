//! Unordered token pairs and the base token set.

use crate::token::{Token, TokenAddress};
use serde::Serialize;
use std::hash::{Hash, Hasher};

/// Order-independent identity of a pair: the two normalized addresses,
/// smaller first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PairKey(TokenAddress, TokenAddress);

impl PairKey {
	pub fn new(a: &TokenAddress, b: &TokenAddress) -> Self {
		if a <= b {
			Self(a.clone(), b.clone())
		} else {
			Self(b.clone(), a.clone())
		}
	}
}

/// Two distinct tokens considered together for a liquidity lookup.
///
/// The pair remembers the orientation it was built with, but equality and
/// hashing treat `(A, B)` and `(B, A)` as the same pair.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
	first: Token,
	second: Token,
}

impl TokenPair {
	/// Builds a pair, or `None` when either side is missing or both sides
	/// share an address.
	pub fn new(first: Token, second: Token) -> Option<Self> {
		if first.is_missing() || second.is_missing() || first.same_as(&second) {
			return None;
		}
		Some(Self { first, second })
	}

	pub fn first(&self) -> &Token {
		&self.first
	}

	pub fn second(&self) -> &Token {
		&self.second
	}

	pub fn key(&self) -> PairKey {
		PairKey::new(&self.first.address, &self.second.address)
	}

	/// The pair ordered by address, the ordering AMM pools store tokens in.
	pub fn sorted(&self) -> (&Token, &Token) {
		if self.first.address <= self.second.address {
			(&self.first, &self.second)
		} else {
			(&self.second, &self.first)
		}
	}

	/// Whether this pair joins exactly the two given tokens, in any order.
	pub fn joins(&self, a: &Token, b: &Token) -> bool {
		self.key() == PairKey::new(&a.address, &b.address)
	}
}

impl PartialEq for TokenPair {
	fn eq(&self, other: &Self) -> bool {
		self.key() == other.key()
	}
}

impl Eq for TokenPair {}

impl Hash for TokenPair {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.key().hash(state);
	}
}

/// Commonly traded intermediary tokens, in configured order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct BaseTokenSet(Vec<Token>);

impl BaseTokenSet {
	pub fn new(tokens: Vec<Token>) -> Self {
		Self(tokens)
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Token> {
		self.0.iter()
	}

	pub fn as_slice(&self) -> &[Token] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<Token> for BaseTokenSet {
	fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> IntoIterator for &'a BaseTokenSet {
	type Item = &'a Token;
	type IntoIter = std::slice::Iter<'a, Token>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}
