//! Shared zone fixtures: a small authority hierarchy with a delegation
//! and an alias, in the two line-oriented zone formats.

use ironwood_dns_infrastructure::zone::{parse_domains, parse_records};
use ironwood_dns_infrastructure::ZoneTree;

pub const DOMAINS: &str = "\
www.example.com
ns.example.com
alias.example.com
one.example.com
two.example.com
";

/// The root delegates `www.example.com` to the `ns.example.com`
/// authority, which holds the actual address; `alias.example.com` is a
/// CNAME to `www.example.com`; `one`/`two` answer directly at the root.
pub const RECORDS: &str = "\
. www.example.com 172800 NS IN ns.example.com
ns.example.com www.example.com 300 A IN 10.0.0.1
. alias.example.com 300 CNAME IN www.example.com
. one.example.com 300 A IN 192.0.2.1
. two.example.com 300 A IN 192.0.2.2
";

pub fn example_tree() -> ZoneTree {
    let mut tree = parse_domains(DOMAINS);
    parse_records(&mut tree, RECORDS).expect("fixture records are well-formed");
    tree
}
