//! Error types for token resolution and pairing.

use crate::network::Network;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PairsError>;

#[derive(Error, Debug)]
pub enum PairsError {
	#[error("Unknown token: {0}")]
	UnknownToken(String),

	#[error("Invalid address '{address}': {reason}")]
	InvalidAddress { address: String, reason: String },

	#[error("Network not configured: {0}")]
	NetworkNotConfigured(Network),

	#[error("Configuration error: {0}")]
	Config(String),
}
