//! Request and response types for the HTTP API.

use crate::network::Network;
use crate::token::Token;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/pairs`. Each side is a symbol or an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairsQuery {
	pub from: String,
	pub to: String,
}

/// One pair worth checking for liquidity, tokens ordered by address the
/// way pools store them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairView {
	pub token0: Token,
	pub token1: Token,
	/// Derived pool address, present when the network has a pool factory
	/// configured.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub pool_address: Option<String>,
}

/// Response of `GET /api/pairs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairsResponse {
	pub network: Network,
	pub chain_id: u64,
	/// Source token after native wrapping.
	pub from: Token,
	/// Destination token after native wrapping.
	pub to: Token,
	pub pairs: Vec<PairView>,
	pub count: usize,
}

/// Response of `GET /api/tokens`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensResponse {
	pub network: Network,
	pub chain_id: u64,
	pub base_tokens: Vec<Token>,
	pub tokens: Vec<Token>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
	pub status: String,
	pub network: Network,
	pub timestamp: i64,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
	/// Machine readable error code
	pub error: String,
	/// Human readable message
	pub message: String,
}
