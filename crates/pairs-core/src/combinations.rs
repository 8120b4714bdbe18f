//! Token pair enumeration for multi-hop routing.
//!
//! A router prices `from -> to` directly and through the base tokens
//! (`from -> base -> to`, `from -> base -> base -> to`). Every pool such a
//! path can touch is one of the pairs produced here. Candidates are
//! over-generated and then filtered, so the output order is the order in
//! which each pair is first produced: the direct pair leads, then the pairs
//! of `from` with each base, then those of `to`, then base-to-base pairs.

use pairs_types::{BaseTokenSet, PairKey, Token, TokenPair};
use std::collections::HashSet;

/// Produces the deduplicated, ordered pairs to check for liquidity.
#[derive(Debug, Clone, Default)]
pub struct CombinationGenerator {
	bases: BaseTokenSet,
}

impl CombinationGenerator {
	pub fn new(bases: BaseTokenSet) -> Self {
		Self { bases }
	}

	pub fn bases(&self) -> &BaseTokenSet {
		&self.bases
	}

	/// Every pair worth querying for a `from -> to` trade.
	///
	/// Pairs with a missing token or two equal addresses are dropped, and
	/// `(A, B)` is never emitted after `(B, A)`.
	pub fn generate(&self, from: &Token, to: &Token) -> Vec<TokenPair> {
		let mut seen = HashSet::new();
		let mut pairs = Vec::new();

		for (a, b) in self.candidates(from, to) {
			if a.is_missing() || b.is_missing() || a.same_as(b) {
				continue;
			}
			if !seen.insert(PairKey::new(&a.address, &b.address)) {
				continue;
			}
			if let Some(pair) = TokenPair::new(a.clone(), b.clone()) {
				pairs.push(pair);
			}
		}

		pairs
	}

	fn candidates<'a>(
		&'a self,
		from: &'a Token,
		to: &'a Token,
	) -> impl Iterator<Item = (&'a Token, &'a Token)> + 'a {
		let working: Vec<&'a Token> = self.bases.iter().chain([from, to]).collect();
		let cross: Vec<(&'a Token, &'a Token)> = working
			.iter()
			.flat_map(|&a| working.iter().map(move |&b| (a, b)))
			.collect();

		std::iter::once((from, to))
			.chain(self.bases.iter().map(move |base| (from, base)))
			.chain(self.bases.iter().map(move |base| (to, base)))
			.chain(cross)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn token(address: &str, symbol: &str) -> Token {
		Token::new(address, 18, symbol)
	}

	fn weth() -> Token {
		token("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "WETH")
	}

	fn usdc() -> Token {
		token("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", "USDC")
	}

	fn usdt() -> Token {
		token("0xdac17f958d2ee523a2206206994597c13d831ec7", "USDT")
	}

	fn symbols(pairs: &[TokenPair]) -> Vec<(String, String)> {
		pairs
			.iter()
			.map(|p| (p.first().symbol.clone(), p.second().symbol.clone()))
			.collect()
	}

	fn generator(bases: Vec<Token>) -> CombinationGenerator {
		CombinationGenerator::new(BaseTokenSet::new(bases))
	}

	#[test]
	fn test_two_bases_two_queries() {
		let (a, b) = (token("0x0a", "A"), token("0x0b", "B"));
		let (c, d) = (token("0x0c", "C"), token("0x0d", "D"));
		let pairs = generator(vec![c.clone(), d.clone()]).generate(&a, &b);

		assert_eq!(
			symbols(&pairs),
			vec![
				("A".to_string(), "B".to_string()),
				("A".to_string(), "C".to_string()),
				("A".to_string(), "D".to_string()),
				("B".to_string(), "C".to_string()),
				("B".to_string(), "D".to_string()),
				("C".to_string(), "D".to_string()),
			]
		);
		for (x, y) in [(&a, &b), (&a, &c), (&a, &d), (&b, &c), (&b, &d), (&c, &d)] {
			assert!(pairs.iter().any(|p| p.joins(x, y)));
		}
	}

	#[test]
	fn test_reverse_pairs_are_deduplicated() {
		let (a, b) = (token("0x0a", "A"), token("0x0b", "B"));
		let pairs = generator(vec![token("0x0c", "C"), token("0x0d", "D")]).generate(&a, &b);

		let forward = pairs.iter().filter(|p| p.first() == &a && p.second() == &b);
		let backward = pairs.iter().filter(|p| p.first() == &b && p.second() == &a);
		assert_eq!(forward.count() + backward.count(), 1);

		let unique: HashSet<_> = pairs.iter().map(|p| p.key()).collect();
		assert_eq!(unique.len(), pairs.len());
	}

	#[test]
	fn test_no_self_pairs() {
		let pairs = generator(vec![weth(), usdc(), usdt()]).generate(&usdc(), &weth());
		assert!(!pairs.is_empty());
		for pair in &pairs {
			assert_ne!(pair.first().address, pair.second().address);
		}
	}

	#[test]
	fn test_direct_pair_comes_first() {
		let dai = token("0x6b175474e89094c44da98b954eedeac495271d0f", "DAI");
		let pairs = generator(vec![weth(), usdc()]).generate(&dai, &usdt());
		assert!(pairs[0].joins(&dai, &usdt()));
		assert_eq!(pairs[0].first(), &dai);
	}

	#[test]
	fn test_deterministic() {
		let generator = generator(vec![weth(), usdc(), usdt()]);
		let from = token("0x01", "X");
		let to = token("0x02", "Y");
		let first = generator.generate(&from, &to);
		let second = generator.generate(&from, &to);
		assert_eq!(symbols(&first), symbols(&second));
	}

	#[test]
	fn test_same_from_and_to() {
		let pairs = generator(vec![weth(), usdc()]).generate(&usdt(), &usdt());
		assert_eq!(
			symbols(&pairs),
			vec![
				("USDT".to_string(), "WETH".to_string()),
				("USDT".to_string(), "USDC".to_string()),
				("WETH".to_string(), "USDC".to_string()),
			]
		);
	}

	#[test]
	fn test_query_token_already_a_base() {
		// WETH -> USDC with both in the base set: every distinct pair of the
		// three tokens, direct pair first.
		let pairs = generator(vec![weth(), usdc(), usdt()]).generate(&weth(), &usdc());
		assert_eq!(pairs.len(), 3);
		assert!(pairs[0].joins(&weth(), &usdc()));
	}

	#[test]
	fn test_duplicate_bases_collapse() {
		let pairs = generator(vec![weth(), usdc(), usdc()]).generate(&usdt(), &weth());
		let unique: HashSet<_> = pairs.iter().map(|p| p.key()).collect();
		assert_eq!(unique.len(), pairs.len());
		assert_eq!(pairs.len(), 3);
	}

	#[test]
	fn test_missing_token_pairs_with_nothing() {
		let broken = token("", "BROKEN");
		let pairs = generator(vec![weth(), usdc()]).generate(&broken, &usdt());
		assert!(pairs.iter().all(|p| !p.first().is_missing() && !p.second().is_missing()));
		// usdt-weth, usdt-usdc, weth-usdc
		assert_eq!(pairs.len(), 3);
	}

	#[test]
	fn test_no_bases() {
		let pairs = CombinationGenerator::default().generate(&weth(), &usdc());
		assert_eq!(pairs.len(), 1);
		assert!(pairs[0].joins(&usdc(), &weth()));
	}
}
