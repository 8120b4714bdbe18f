//! Configuration for the swap-pairs service.

pub mod loader;
pub mod types;

pub use loader::{load_config, locate_config, process_env, substitute_vars, ConfigLoader};
pub use types::*;
