//! Token pair generation for swap routing.
//!
//! [`CombinationGenerator`] is the pure core. [`PairsEngine`] wires it to a
//! network's token registry, native wrapping and pool address derivation.

pub mod combinations;
pub mod engine;
pub mod pool;
pub mod registry;
pub mod wrap;

pub use combinations::CombinationGenerator;
pub use engine::{PairCombinations, PairsEngine, ResolvedPair};
pub use pool::PoolAddressDeriver;
pub use registry::TokenRegistry;
pub use wrap::NativeWrapper;
