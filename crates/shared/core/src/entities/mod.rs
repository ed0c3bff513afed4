mod breakdown;
mod liquidity;
mod model_config;
mod request;
mod result;
mod side;
mod status;

pub use breakdown::ModelCostBreakdown;
pub use liquidity::{CachedAdv, LiquidityRecord};
pub use model_config::{ImpactModelConfig, ModelKind};
pub use request::{EstimateInput, RequestId, TradeRequest, ValidationError};
pub use result::CostResult;
pub use side::Side;
pub use status::RequestStatus;
