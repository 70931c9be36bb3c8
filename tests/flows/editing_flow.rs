//! Editing-session flows: the tree is mutated between resolution
//! sessions, never during one — each session gets its own engine over a
//! frozen tree.

use std::sync::Arc;

use ironwood_dns_application::HostResolver;
use ironwood_dns_domain::{RecordType, ResourceRecord};
use ironwood_dns_infrastructure::{ResolutionEngine, Resolver};

#[path = "../common/fixtures.rs"]
mod fixtures;

#[tokio::test]
async fn test_record_added_during_editing_is_resolvable_next_session() {
    let mut tree = fixtures::example_tree();

    let example = tree.lookup_from_root("www.example").expect("existing chain");
    tree.add_child(example, "lab");
    assert!(tree.add_record(
        "www.example.lab",
        ResourceRecord::new("lab.example.com", RecordType::A, 60, "10.9.9.9"),
    ));
    // The new node must be reachable by delegation from the root.
    assert!(tree.add_record(
        ".",
        ResourceRecord::new("lab.example.com", RecordType::NS, 60, "www.example.lab"),
    ));

    let resolver = Resolver::new(Arc::new(ResolutionEngine::new(Arc::new(tree))));
    let data = resolver.ask_and_wait("lab.example.com", RecordType::A).await;

    assert_eq!(data, "10.9.9.9");
}

#[tokio::test]
async fn test_removed_subtree_no_longer_answers() {
    let mut tree = fixtures::example_tree();

    let ns_top = tree.lookup_from_root("ns").expect("delegate chain");
    assert!(tree.remove_child(tree.root(), ns_top));

    let resolver = Resolver::new(Arc::new(ResolutionEngine::new(Arc::new(tree))));
    // The root still holds the NS referral, but its target is gone.
    let data = resolver.ask_and_wait("www.example.com", RecordType::A).await;

    assert_eq!(data, "Not found");
}
