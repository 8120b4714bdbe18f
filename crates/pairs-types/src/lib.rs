//! Shared value types for the swap-pairs workspace.

pub mod api;
pub mod errors;
pub mod network;
pub mod pair;
pub mod token;

pub use api::*;
pub use errors::{PairsError, Result};
pub use network::*;
pub use pair::*;
pub use token::*;
