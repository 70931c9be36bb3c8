use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use ironwood_dns_application::HostResolver;
use ironwood_dns_domain::{RecordType, RequestHandle, NOT_FOUND_RDATA};
use rustc_hash::FxBuildHasher;
use tokio::sync::oneshot;
use tracing::debug;

use super::engine::ResolutionEngine;

/// Correlation slot for one client request; see the engine's slot for the
/// absent/pending/present reading.
struct RequestSlot {
    rx: oneshot::Receiver<String>,
}

/// Client-facing asynchronous facade over the resolution engine.
///
/// Each `ask` runs the engine's `query`/`resolve` pair on its own task
/// and completes the request slot with the resulting record's rdata,
/// which is the not-found marker when resolution exhausted every
/// authority. Handles are allocated from a counter owned by this
/// instance, so independent simulations never collide.
pub struct Resolver {
    engine: Arc<ResolutionEngine>,
    pending: DashMap<RequestHandle, RequestSlot, FxBuildHasher>,
    next_handle: AtomicU64,
}

impl Resolver {
    pub fn new(engine: Arc<ResolutionEngine>) -> Self {
        Self {
            engine,
            pending: DashMap::default(),
            next_handle: AtomicU64::new(0),
        }
    }
}

#[async_trait]
impl HostResolver for Resolver {
    fn ask(&self, name: &str, record_type: RecordType) -> RequestHandle {
        let handle = RequestHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();
        self.pending.insert(handle, RequestSlot { rx });

        let engine = Arc::clone(&self.engine);
        let name = name.to_string();
        tokio::spawn(async move {
            let response_handle = engine.query(&name, record_type);
            let record = engine.resolve(response_handle).await;
            debug!(%handle, %response_handle, "request resolved");

            let data = record
                .map(|record| record.rdata)
                .unwrap_or_else(|| NOT_FOUND_RDATA.to_string());
            let _ = tx.send(data);
        });

        handle
    }

    async fn ask_and_wait(&self, name: &str, record_type: RecordType) -> String {
        let handle = self.ask(name, record_type);
        self.get_or_wait(handle)
            .await
            .unwrap_or_else(|| NOT_FOUND_RDATA.to_string())
    }

    async fn get_or_wait(&self, handle: RequestHandle) -> Option<String> {
        let (_, slot) = self.pending.remove(&handle)?;
        // A dropped sender is unreachable by construction; degrade to the
        // not-found marker rather than panicking.
        Some(slot.rx.await.unwrap_or_else(|_| NOT_FOUND_RDATA.to_string()))
    }
}
