//! Loaders for the two line-oriented zone formats: the domain list that
//! shapes the authority tree and the record list that populates it.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use ironwood_dns_domain::{DomainError, RecordType, ResourceRecord};
use tracing::{debug, warn};

use super::tree::ZoneTree;

/// Builds an authority tree from a domain list file: one fully-qualified
/// dotted name per line.
pub fn load_domains(path: &Path) -> Result<ZoneTree, DomainError> {
    let text = fs::read_to_string(path).map_err(|e| DomainError::Io(e.to_string()))?;
    Ok(parse_domains(&text))
}

/// Inserts every listed name as a chain of nodes from the root, reusing
/// existing nodes for shared prefixes. Empty path segments and blank
/// lines are ignored.
pub fn parse_domains(text: &str) -> ZoneTree {
    let mut tree = ZoneTree::new();
    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        let mut cursor = tree.root();
        for label in name.split('.').filter(|segment| !segment.is_empty()) {
            cursor = match tree.child_by_label(cursor, label) {
                Some(existing) => existing,
                None => tree.add_child(cursor, label),
            };
        }
    }
    tree
}

/// Attaches the records listed in `path` to the nodes of `tree`.
pub fn load_records(tree: &mut ZoneTree, path: &Path) -> Result<(), DomainError> {
    let text = fs::read_to_string(path).map_err(|e| DomainError::Io(e.to_string()))?;
    parse_records(tree, &text)
}

/// Parses the whitespace-delimited record list.
///
/// Two line shapes are accepted:
/// `NODE TTL TYPE CLASS DATA` — the record owner is inherited from the
/// most recently seen explicit owner;
/// `NODE OWNER TTL TYPE CLASS DATA` — the owner is given and remembered
/// for subsequent five-field lines.
///
/// `NODE` is the tree path the record attaches to (`.` for the root);
/// `CLASS` is carried by the format but ignored. Lines with any other
/// token count are skipped. A record whose `NODE` path does not resolve
/// is dropped with a warning, preserving the format's permissive
/// behavior while still surfacing it.
pub fn parse_records(tree: &mut ZoneTree, text: &str) -> Result<(), DomainError> {
    let mut last_owner = String::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        let (node_path, owner, ttl_token, type_token, rdata) = match tokens.as_slice() {
            [] => continue,
            [node_path, ttl, record_type, _class, rdata] => {
                (*node_path, last_owner.clone(), *ttl, *record_type, *rdata)
            }
            [node_path, owner, ttl, record_type, _class, rdata] => {
                last_owner = (*owner).to_string();
                (*node_path, last_owner.clone(), *ttl, *record_type, *rdata)
            }
            _ => {
                debug!(line = line_number, "skipping unrecognized record line");
                continue;
            }
        };

        let ttl: u32 = ttl_token
            .parse()
            .map_err(|_| DomainError::MalformedRecord {
                line: line_number,
                reason: format!("invalid TTL '{ttl_token}'"),
            })?;
        // An unknown type mnemonic degrades to UNSET instead of failing
        // the whole load.
        let record_type = RecordType::from_str(type_token).unwrap_or(RecordType::Unset);

        let record = ResourceRecord::new(owner, record_type, ttl, rdata);
        if !tree.add_record(node_path, record) {
            warn!(
                line = line_number,
                path = node_path,
                "record node path does not exist, dropping record"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironwood_dns_domain::{Message, RecordType};

    const DOMAINS: &str = "\
www.example.com
ns.example.com

mail.example.com
www.example.com
";

    #[test]
    fn test_domains_share_prefix_nodes() {
        let tree = parse_domains(DOMAINS);

        // The repeated "www.example.com" line reused the existing chain.
        assert_eq!(tree.children(tree.root()).len(), 3);
        assert!(tree.lookup_from_root("www.example.com").is_some());
        assert!(tree.lookup_from_root("ns.example.com").is_some());
        assert!(tree.lookup_from_root("mail.example.com").is_some());
    }

    #[test]
    fn test_domains_skip_empty_segments() {
        let tree = parse_domains(".www.example.com\n");
        assert!(tree.lookup_from_root("www.example.com").is_some());
    }

    #[test]
    fn test_six_field_line_sets_owner_and_five_field_inherits_it() {
        let mut tree = parse_domains(DOMAINS);
        let records = "\
. www.example.com 86400 A IN 93.184.216.34
. 86400 AAAA IN 2606:2800:220:1:248:1893:25c8:1946
";
        parse_records(&mut tree, records).expect("well-formed records");

        let root = tree.root();
        assert_eq!(tree.records(root).len(), 2);
        assert_eq!(tree.records(root)[0].owner, "www.example.com");
        // The five-field AAAA line inherited the explicit owner.
        assert_eq!(tree.records(root)[1].owner, "www.example.com");
        assert_eq!(tree.records(root)[1].record_type, RecordType::AAAA);
    }

    #[test]
    fn test_records_attach_to_named_node() {
        let mut tree = parse_domains(DOMAINS);
        let records = "ns.example.com www.example.com 300 A IN 10.0.0.1\n";
        parse_records(&mut tree, records).expect("well-formed records");

        let node = tree.lookup_from_root("ns.example.com").expect("node");
        let response = tree.query(node, &Message::iterative("www.example.com", RecordType::A));
        assert_eq!(response.answers.len(), 1);
        assert_eq!(response.answers[0].rdata, "10.0.0.1");
    }

    #[test]
    fn test_unknown_node_path_drops_record() {
        let mut tree = parse_domains(DOMAINS);
        let records = "absent.example.com www.example.com 300 A IN 10.0.0.1\n";
        parse_records(&mut tree, records).expect("drop is not an error");

        assert!(tree.records(tree.root()).is_empty());
    }

    #[test]
    fn test_unrecognized_token_count_is_skipped() {
        let mut tree = parse_domains(DOMAINS);
        let records = "too few tokens\n. www.example.com 300 A IN 1.2.3.4\n";
        parse_records(&mut tree, records).expect("bad line is skipped");

        assert_eq!(tree.records(tree.root()).len(), 1);
    }

    #[test]
    fn test_invalid_ttl_is_reported() {
        let mut tree = parse_domains(DOMAINS);
        let records = ". www.example.com soon A IN 1.2.3.4\n";

        let err = parse_records(&mut tree, records).expect_err("TTL must be numeric");
        assert!(matches!(err, DomainError::MalformedRecord { line: 1, .. }));
    }

    #[test]
    fn test_unknown_type_mnemonic_degrades_to_unset() {
        let mut tree = parse_domains(DOMAINS);
        let records = ". www.example.com 300 TXT IN hello\n";
        parse_records(&mut tree, records).expect("unknown type is not an error");

        assert_eq!(tree.records(tree.root())[0].record_type, RecordType::Unset);
    }
}
