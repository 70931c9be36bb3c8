use std::sync::Arc;

use ironwood_dns_domain::{RecordType, NOT_FOUND_RDATA};

use crate::ports::HostResolver;

/// Outcome of a client resolution, with the not-found marker already
/// folded into an absent address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResolution {
    pub name: String,
    pub record_type: RecordType,
    pub address: Option<String>,
}

impl HostResolution {
    pub fn found(&self) -> bool {
        self.address.is_some()
    }
}

pub struct ResolveHostUseCase {
    resolver: Arc<dyn HostResolver>,
}

impl ResolveHostUseCase {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, name: &str, record_type: RecordType) -> HostResolution {
        let data = self.resolver.ask_and_wait(name, record_type).await;
        let address = (data != NOT_FOUND_RDATA).then_some(data);

        HostResolution {
            name: name.to_string(),
            record_type,
            address,
        }
    }
}
