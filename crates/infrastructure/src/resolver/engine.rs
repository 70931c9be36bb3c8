use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use ironwood_dns_domain::{
    canonical_name, Message, RecordType, ResourceRecord, ResponseHandle,
};
use rustc_hash::FxBuildHasher;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::zone::{NodeId, ZoneTree};

/// Default bound on authorities visited per resolution attempt. Keeps
/// cyclic NS delegation from looping forever; exceeding it resolves the
/// attempt as not-found.
pub const DEFAULT_HOP_LIMIT: usize = 32;

type RecordCache = DashMap<String, Vec<ResourceRecord>, FxBuildHasher>;
type TraceStore = DashMap<ResponseHandle, Vec<String>, FxBuildHasher>;

/// Correlation slot for one engine query. Absent from the map: the handle
/// was never issued or already consumed. Receiver not yet fired: the
/// resolution attempt is still pending. Value buffered: resolved.
struct ResponseSlot {
    name: String,
    rx: oneshot::Receiver<ResourceRecord>,
}

/// Cache-and-resolve orchestrator over one authority tree.
///
/// `query` is non-blocking: on a cache hit the freshly allocated handle
/// is completed synchronously with zero authority visits, on a miss an
/// iterative walk is spawned onto its own task. `resolve` waits for the
/// handle's slot to leave the pending state and consumes it.
pub struct ResolutionEngine {
    tree: Arc<ZoneTree>,
    cache: Arc<RecordCache>,
    responses: DashMap<ResponseHandle, ResponseSlot, FxBuildHasher>,
    traces: Arc<TraceStore>,
    next_handle: AtomicU64,
    visits: Arc<AtomicU64>,
    hop_limit: usize,
}

impl ResolutionEngine {
    pub fn new(tree: Arc<ZoneTree>) -> Self {
        Self::with_hop_limit(tree, DEFAULT_HOP_LIMIT)
    }

    pub fn with_hop_limit(tree: Arc<ZoneTree>, hop_limit: usize) -> Self {
        Self {
            tree,
            cache: Arc::new(RecordCache::default()),
            responses: DashMap::default(),
            traces: Arc::new(TraceStore::default()),
            next_handle: AtomicU64::new(0),
            visits: Arc::new(AtomicU64::new(0)),
            hop_limit,
        }
    }

    /// Issues a query and returns the handle its result will appear
    /// under. Never blocks on the authority tree.
    pub fn query(&self, name: &str, record_type: RecordType) -> ResponseHandle {
        let handle = ResponseHandle::new(self.next_handle.fetch_add(1, Ordering::Relaxed));
        let (tx, rx) = oneshot::channel();
        self.responses.insert(
            handle,
            ResponseSlot {
                name: name.to_string(),
                rx,
            },
        );

        if let Some(cached) = self.check_cache(name, record_type) {
            debug!(name, record_type = %record_type, %handle, "cache hit");
            let _ = tx.send(cached);
            return handle;
        }

        debug!(name, record_type = %record_type, %handle, "cache miss, spawning iterative walk");
        let walk = Walk {
            tree: Arc::clone(&self.tree),
            cache: Arc::clone(&self.cache),
            traces: Arc::clone(&self.traces),
            visits: Arc::clone(&self.visits),
            hop_limit: self.hop_limit,
            name: name.to_string(),
            record_type,
            handle,
            tx,
        };
        tokio::spawn(async move { walk.run() });

        handle
    }

    /// Waits for the result stored under `handle` and consumes the slot.
    /// Returns `None` if the handle was never issued or was already
    /// consumed; otherwise returns only once the slot is resolved.
    pub async fn resolve(&self, handle: ResponseHandle) -> Option<ResourceRecord> {
        let (_, slot) = self.responses.remove(&handle)?;
        let ResponseSlot { name, rx } = slot;
        // A dropped sender is unreachable by construction; degrade to the
        // not-found sentinel rather than panicking.
        Some(rx.await.unwrap_or_else(|_| ResourceRecord::not_found(name)))
    }

    /// Takes the per-step trace accumulated by the walk behind `handle`.
    /// Cache hits leave no trace.
    pub fn take_trace(&self, handle: ResponseHandle) -> Option<Vec<String>> {
        self.traces.remove(&handle).map(|(_, lines)| lines)
    }

    /// Cumulative number of authorities visited by this engine's walks.
    pub fn authority_visits(&self) -> u64 {
        self.visits.load(Ordering::Relaxed)
    }

    fn check_cache(&self, name: &str, record_type: RecordType) -> Option<ResourceRecord> {
        self.cache.get(canonical_name(name)).and_then(|records| {
            records
                .iter()
                .find(|record| record.record_type == record_type)
                .cloned()
        })
    }
}

/// One spawned iterative resolution attempt.
struct Walk {
    tree: Arc<ZoneTree>,
    cache: Arc<RecordCache>,
    traces: Arc<TraceStore>,
    visits: Arc<AtomicU64>,
    hop_limit: usize,
    name: String,
    record_type: RecordType,
    handle: ResponseHandle,
    tx: oneshot::Sender<ResourceRecord>,
}

impl Walk {
    fn run(self) {
        let mut trace = vec![format!(
            "Received query for {} records of '{}'",
            self.record_type, self.name
        )];

        // Most-recently-discovered authority first: delegations are
        // explored depth-first before backtracking to older candidates.
        let mut authorities: Vec<NodeId> = vec![self.tree.root()];
        let mut names: Vec<String> = vec![self.name.clone()];
        let mut answer: Option<ResourceRecord> = None;
        let mut hops = 0usize;

        'walk: while let Some(authority) = authorities.pop() {
            if hops == self.hop_limit {
                warn!(name = %self.name, limit = self.hop_limit, "hop limit reached, giving up");
                trace.push(format!(
                    "Gave up after visiting {} authorities without an answer",
                    self.hop_limit
                ));
                break;
            }
            hops += 1;
            self.visits.fetch_add(1, Ordering::Relaxed);

            let authority_address = self.tree.address(authority);
            // Aliases discovered at this authority; they join the name
            // set only once the authority is done.
            let mut aliases: Vec<String> = Vec::new();

            for name in &names {
                let request = Message::iterative(name.clone(), self.record_type);
                trace.push(format!(
                    "Request: {} query, searching in domain '{}' for {} records of '{}'",
                    request.method, authority_address, self.record_type, name
                ));

                let asked_at = Instant::now();
                let response = self.tree.query(authority, &request);
                trace.push(format!(
                    "Response received in {:.9} seconds.",
                    asked_at.elapsed().as_secs_f64()
                ));

                for record in &response.answers {
                    if record.record_type == self.record_type {
                        trace.push(format!("---- Received answer: {}", record.rdata));
                        answer = Some(record.clone());
                        break 'walk;
                    }
                }

                for record in &response.authority {
                    match record.record_type {
                        RecordType::NS => match self.tree.lookup_from_root(&record.rdata) {
                            Some(delegate) => {
                                trace.push(format!("--- Pointed delegate '{}'", record.rdata));
                                authorities.push(delegate);
                            }
                            None => {
                                warn!(target = %record.rdata, "NS target is not a known authority, ignoring");
                                trace.push(format!(
                                    "--- Ignored delegate '{}', no such authority",
                                    record.rdata
                                ));
                            }
                        },
                        RecordType::CNAME => {
                            trace.push(format!("--- Found alias '{}'", record.rdata));
                            aliases.push(record.rdata.clone());
                        }
                        _ => {}
                    }
                }

                // `additional` records are informational only.
            }

            let mut merged_new = false;
            for alias in aliases {
                if !names.contains(&alias) {
                    names.push(alias);
                    merged_new = true;
                }
            }
            // An alias found at the last remaining authority would
            // otherwise never be tried; give the authority one more
            // round with the expanded name set. Bounded by the name
            // dedup above and the hop limit.
            if merged_new && authorities.is_empty() {
                trace.push("Retrying authority with newly discovered aliases".to_string());
                authorities.push(authority);
            }
        }

        let record = match answer {
            Some(record) => {
                self.cache
                    .entry(canonical_name(&self.name).to_string())
                    .or_default()
                    .push(record.clone());
                record
            }
            None => {
                trace.push("Could not find an appropriate answer for the request".to_string());
                ResourceRecord::not_found(&self.name)
            }
        };

        self.traces.insert(self.handle, trace);
        // The receiver may already be gone if the caller never resolves.
        let _ = self.tx.send(record);
    }
}
