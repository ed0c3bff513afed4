//! Plutus Worker
//!
//! The worker crate sits between callers and the selection engine,
//! responsible for:
//! - **Intake**: Validates and prices submissions, persists them as queued requests
//! - **Dispatch**: Bounded queue with duplicate suppression per request id
//! - **Evaluation**: A worker pool drives each request to `done` or `error`
//! - **Resilience**: Per-attempt timeouts and retry backoff for transient store failures
//!
//! ## Architecture
//!
//! ```text
//! Caller ──► EstimationService::submit ──► RequestStore (queued)
//!                      │
//!                      ▼
//!              DispatchHandle::enqueue ──► bounded mpsc queue
//!                                                │
//!                          ┌─────────────────────┴───────┐
//!                          ▼                             ▼
//!                     worker task 0      ...        worker task N
//!                          │                             │
//!                          └──────── CostWorker::process ┘
//!                                          │
//!                    liquidity / price / model lookups
//!                                          │
//!                             SelectionEngine::evaluate
//!                                          │
//!                        ┌─────────────────┴────────────────┐
//!                        ▼                                  ▼
//!              ResultSink::upsert                 RequestStore::update_status
//!              RequestStore -> done                        -> error
//! ```
//!
//! Evaluation failures conclude the request as `error`; infrastructure
//! failures are retried with backoff. Every accepted request reaches a
//! terminal status.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plutus_worker::{DispatcherConfig, EstimatorBootstrap};
//!
//! let stack = EstimatorBootstrap::start(DispatcherConfig::default());
//!
//! // publish reference data, then submit
//! let id = stack.service.submit(input).await?;
//!
//! // poll until the request concludes
//! let view = stack.service.status(id).await?;
//! ```

pub mod bootstrap;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod service;
pub mod worker;

pub use bootstrap::EstimatorBootstrap;
pub use config::DispatcherConfig;
pub use dispatcher::{DispatchHandle, Dispatcher};
pub use error::{ServiceError, WorkerError};
pub use service::{EstimationService, StatusView};
pub use worker::CostWorker;
