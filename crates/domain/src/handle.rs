use std::fmt;

/// Correlates a client request issued through the resolver facade with its
/// eventual result. Allocated from a counter owned by the facade instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestHandle(u64);

impl RequestHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req#{}", self.0)
    }
}

/// Correlates an engine query with the record a resolution attempt
/// produces. Allocated from a counter owned by the engine instance.
///
/// Request and response handles are distinct types so a caller can never
/// hand one map's key to the other map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseHandle(u64);

impl ResponseHandle {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResponseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resp#{}", self.0)
    }
}
