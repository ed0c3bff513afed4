//! Plutus Clock Infrastructure
//!
//! Time sources behind the [`Clock`] port:
//!
//! - [`SystemClock`] reads the real wall clock and is the production choice.
//! - [`FixedClock`] is pinned to a caller-controlled instant so that
//!   `computed_at` stamps, cache freshness checks, and stored results are
//!   fully deterministic in tests.

mod fixed;
mod system;

pub use fixed::FixedClock;
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use plutus_ports::Clock;
