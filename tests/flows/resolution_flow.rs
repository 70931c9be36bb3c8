//! Complete resolution flows: client request → facade → engine → authority
//! tree walk → correlated response.

use std::sync::Arc;

use ironwood_dns_application::{HostResolver, ResolveHostUseCase};
use ironwood_dns_domain::{RecordType, RequestHandle};
use ironwood_dns_infrastructure::{ResolutionEngine, Resolver};

#[path = "../common/fixtures.rs"]
mod fixtures;

fn resolver() -> (Arc<ResolutionEngine>, Arc<Resolver>) {
    let engine = Arc::new(ResolutionEngine::new(Arc::new(fixtures::example_tree())));
    let resolver = Arc::new(Resolver::new(Arc::clone(&engine)));
    (engine, resolver)
}

#[tokio::test]
async fn test_delegated_name_resolves_through_facade() {
    let (_, resolver) = resolver();

    let data = resolver.ask_and_wait("www.example.com", RecordType::A).await;

    assert_eq!(data, "10.0.0.1");
}

#[tokio::test]
async fn test_alias_resolves_to_target_address() {
    let (_, resolver) = resolver();

    let data = resolver.ask_and_wait("alias.example.com", RecordType::A).await;

    assert_eq!(data, "10.0.0.1");
}

#[tokio::test]
async fn test_use_case_maps_marker_to_absent_address() {
    let (_, resolver) = resolver();
    let use_case = ResolveHostUseCase::new(resolver);

    let found = use_case.execute("www.example.com", RecordType::A).await;
    assert_eq!(found.address.as_deref(), Some("10.0.0.1"));

    let missing = use_case.execute("missing.example.com", RecordType::A).await;
    assert_eq!(missing.address, None);
}

#[tokio::test]
async fn test_second_identical_request_hits_the_cache() {
    let (engine, resolver) = resolver();

    let first = resolver.ask_and_wait("www.example.com", RecordType::A).await;
    let visits = engine.authority_visits();

    let second = resolver.ask_and_wait("www.example.com", RecordType::A).await;

    assert_eq!(first, second);
    assert_eq!(engine.authority_visits(), visits);
}

#[tokio::test]
async fn test_concurrent_distinct_requests_stay_isolated() {
    let (_, resolver) = resolver();

    let one = resolver.ask("one.example.com", RecordType::A);
    let two = resolver.ask("two.example.com", RecordType::A);
    let www = resolver.ask("www.example.com", RecordType::A);

    let (answer_two, answer_www, answer_one) = tokio::join!(
        resolver.get_or_wait(two),
        resolver.get_or_wait(www),
        resolver.get_or_wait(one),
    );

    assert_eq!(answer_one.as_deref(), Some("192.0.2.1"));
    assert_eq!(answer_two.as_deref(), Some("192.0.2.2"));
    assert_eq!(answer_www.as_deref(), Some("10.0.0.1"));
}

#[tokio::test]
async fn test_unissued_handle_returns_absent_immediately() {
    let (_, resolver) = resolver();

    assert!(resolver.get_or_wait(RequestHandle::new(7)).await.is_none());
}

#[tokio::test]
async fn test_aaaa_request_for_a_only_name_is_not_found() {
    let (_, resolver) = resolver();

    let data = resolver.ask_and_wait("one.example.com", RecordType::AAAA).await;

    assert_eq!(data, "Not found");
}
