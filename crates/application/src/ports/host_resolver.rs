use async_trait::async_trait;
use ironwood_dns_domain::{RecordType, RequestHandle};

/// Client-facing asynchronous resolution port.
///
/// Implementations answer with the rdata string of the record the engine
/// produced, which is the not-found marker when resolution exhausted every
/// authority. Resolution faults never surface as errors here; callers
/// always receive a string-shaped result.
#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Issue a request without waiting for it. The returned handle is the
    /// only way to retrieve the response.
    fn ask(&self, name: &str, record_type: RecordType) -> RequestHandle;

    /// Issue a request and wait for its response.
    async fn ask_and_wait(&self, name: &str, record_type: RecordType) -> String;

    /// Wait for the response to an earlier `ask` and consume it.
    /// Returns `None` immediately if the handle was never issued or the
    /// response was already consumed.
    async fn get_or_wait(&self, handle: RequestHandle) -> Option<String>;
}
