use std::fmt;
use std::str::FromStr;

/// Rdata of the sentinel record returned when a resolution attempt
/// exhausts every authority without an answer.
pub const NOT_FOUND_RDATA: &str = "Not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    CNAME,
    /// Carries no interpretable rdata. Used by the not-found sentinel and
    /// for record lines whose type mnemonic is unrecognized.
    Unset,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::Unset => "UNSET",
        }
    }

    /// True for the types that redirect resolution rather than answer it.
    pub fn is_referral(&self) -> bool {
        matches!(self, RecordType::NS | RecordType::CNAME)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "UNSET" => Ok(RecordType::Unset),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}

/// A single resource record attached to an authority node.
///
/// `owner` is the fully-qualified name the record describes, which is not
/// necessarily the address of the node holding it. The meaning of `rdata`
/// depends on `record_type`: an address for A/AAAA, a target name for
/// NS/CNAME. `ttl` is carried for display but never enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub owner: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub rdata: String,
}

impl ResourceRecord {
    pub fn new(
        owner: impl Into<String>,
        record_type: RecordType,
        ttl: u32,
        rdata: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            record_type,
            ttl,
            rdata: rdata.into(),
        }
    }

    /// Sentinel result for a resolution attempt that found no answer.
    /// Record-shaped so callers never have to handle a raised failure.
    pub fn not_found(owner: impl Into<String>) -> Self {
        Self::new(owner, RecordType::Unset, 0, NOT_FOUND_RDATA)
    }

    pub fn is_not_found(&self) -> bool {
        self.record_type == RecordType::Unset && self.rdata == NOT_FOUND_RDATA
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} IN {}",
            self.owner, self.ttl, self.record_type, self.rdata
        )
    }
}
