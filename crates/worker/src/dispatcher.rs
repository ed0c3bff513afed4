//! Dispatch queue and worker pool
//!
//! Accepted requests are pushed onto a bounded mpsc queue and pulled by a
//! small pool of worker tasks. Each worker owns a request id until it
//! concludes or the retry budget runs out, so one id is never evaluated
//! by two workers at once.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use plutus_core::{RequestId, TradeRequest};
use plutus_ports::{Dispatch, Enqueued, StoreError, StoreResult};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use crate::config::DispatcherConfig;
use crate::error::WorkerError;
use crate::worker::CostWorker;

/// Sending half of the dispatch queue.
///
/// Tracks ids that are queued or being evaluated; a second enqueue of the
/// same request while the first is outstanding is suppressed.
#[derive(Clone)]
pub struct DispatchHandle {
    tx: mpsc::Sender<RequestId>,
    in_flight: Arc<DashMap<RequestId, ()>>,
}

#[async_trait]
impl Dispatch for DispatchHandle {
    async fn enqueue(&self, request: &TradeRequest) -> StoreResult<Enqueued> {
        if self.in_flight.insert(request.id, ()).is_some() {
            log::debug!("[{}] already queued or running", request.id);
            return Ok(Enqueued::Duplicate);
        }
        if self.tx.send(request.id).await.is_err() {
            self.in_flight.remove(&request.id);
            return Err(StoreError::Unavailable(
                "dispatch queue is closed".to_string(),
            ));
        }
        Ok(Enqueued::Accepted)
    }
}

/// Worker pool pulling request ids off the bounded queue
pub struct Dispatcher {
    handle: DispatchHandle,
    workers: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    /// Spawn the worker pool and return the running dispatcher
    pub fn start(worker: Arc<CostWorker>, config: DispatcherConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity);
        let in_flight: Arc<DashMap<RequestId, ()>> = Arc::new(DashMap::new());
        let rx = Arc::new(Mutex::new(rx));

        let mut workers = Vec::with_capacity(config.workers);
        for index in 0..config.workers {
            workers.push(tokio::spawn(Self::run_worker(
                index,
                Arc::clone(&worker),
                Arc::clone(&rx),
                Arc::clone(&in_flight),
                config.clone(),
            )));
        }
        log::info!("Dispatcher started with {} workers", config.workers);

        Self {
            handle: DispatchHandle { tx, in_flight },
            workers,
        }
    }

    /// Cloneable sender for producers
    pub fn handle(&self) -> DispatchHandle {
        self.handle.clone()
    }

    /// Abort the worker pool. Queued jobs are discarded; requests caught
    /// mid-evaluation stay `queued` and can be enqueued again later.
    pub fn shutdown(self) {
        for worker in &self.workers {
            worker.abort();
        }
        log::info!("Dispatcher stopped");
    }

    async fn run_worker(
        index: usize,
        worker: Arc<CostWorker>,
        rx: Arc<Mutex<mpsc::Receiver<RequestId>>>,
        in_flight: Arc<DashMap<RequestId, ()>>,
        config: DispatcherConfig,
    ) {
        log::info!("[worker-{}] started", index);
        loop {
            // the lock is held only while waiting for the next id, never
            // across an evaluation
            let next = { rx.lock().await.recv().await };
            let Some(request_id) = next else {
                break;
            };
            Self::run_job(index, worker.as_ref(), request_id, &config).await;
            in_flight.remove(&request_id);
        }
        log::info!("[worker-{}] stopped", index);
    }

    /// Run one job to conclusion with a per-attempt timeout and retry
    /// backoff for transient failures.
    async fn run_job(
        index: usize,
        worker: &CostWorker,
        request_id: RequestId,
        config: &DispatcherConfig,
    ) {
        let mut attempt: u32 = 0;
        loop {
            match tokio::time::timeout(config.job_timeout, worker.process(request_id)).await {
                Ok(Ok(status)) => {
                    log::debug!(
                        "[worker-{}] {} concluded as {}",
                        index,
                        request_id,
                        status.as_str()
                    );
                    return;
                }
                Ok(Err(WorkerError::UnknownRequest(id))) => {
                    log::error!(
                        "[worker-{}] {} is not in the request store, dropping job",
                        index,
                        id
                    );
                    return;
                }
                Ok(Err(err)) => {
                    log::warn!(
                        "[worker-{}] {} attempt {} failed: {}",
                        index,
                        request_id,
                        attempt + 1,
                        err
                    );
                }
                Err(_) => {
                    log::warn!(
                        "[worker-{}] {} attempt {} timed out after {:?}",
                        index,
                        request_id,
                        attempt + 1,
                        config.job_timeout
                    );
                }
            }
            if attempt >= config.retry_max {
                log::error!(
                    "[worker-{}] {} gave up after {} attempts",
                    index,
                    request_id,
                    attempt + 1
                );
                return;
            }
            tokio::time::sleep(config.retry_delay(attempt)).await;
            attempt += 1;
        }
    }
}
