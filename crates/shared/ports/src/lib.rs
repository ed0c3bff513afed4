//! Plutus Ports
//!
//! Port definitions (traits) for the Plutus cost estimation system.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod dispatch;
mod error;
mod liquidity;
mod models;
mod prices;
mod requests;
mod results;

pub use clock::Clock;
pub use dispatch::{Dispatch, Enqueued};
pub use error::{StoreError, StoreResult};
pub use liquidity::LiquiditySource;
pub use models::ModelSource;
pub use prices::PriceSource;
pub use requests::RequestStore;
pub use results::ResultSink;
