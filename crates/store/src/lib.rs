//! Plutus Storage Adapters
//!
//! Thread-safe in-memory implementations of the storage ports, suitable
//! for single-process deployments and tests. Every adapter is a thin
//! wrapper over shared [`dashmap::DashMap`] state, so clones are cheap
//! views of the same data.
//!
//! [`AdvCache`] is the one composite here: it decorates any
//! [`plutus_ports::LiquiditySource`] with read-through TTL caching.

mod cache;
mod liquidity;
mod models;
mod prices;
mod requests;
mod results;

pub use cache::AdvCache;
pub use liquidity::MemoryLiquidityStore;
pub use models::MemoryModelStore;
pub use prices::MemoryPriceStore;
pub use requests::MemoryRequestStore;
pub use results::MemoryResultSink;
