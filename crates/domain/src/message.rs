use std::fmt;

use crate::record::{RecordType, ResourceRecord};

/// How an authority is asked to handle a query. Only `Iterative` is
/// exercised by the resolution engine; `Recursive` is declared for
/// completeness of the envelope and rejected by authorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMethod {
    Iterative,
    Recursive,
}

impl fmt::Display for QueryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMethod::Iterative => write!(f, "ITERATIVE"),
            QueryMethod::Recursive => write!(f, "RECURSIVE"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub record_type: RecordType,
}

/// Request envelope sent to a single authority node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub method: QueryMethod,
    pub question: Question,
}

impl Message {
    pub fn iterative(name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            method: QueryMethod::Iterative,
            question: Question {
                name: name.into(),
                record_type,
            },
        }
    }
}

/// Response of a single authority to one `Message`.
///
/// `answers` holds records matching the requested type, `authority` holds
/// the NS and CNAME records that redirect resolution, `additional` holds
/// everything else found under the requested name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
}

impl Response {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authority.is_empty() && self.additional.is_empty()
    }
}
