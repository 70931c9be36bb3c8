use std::str::FromStr;

use ironwood_dns_domain::{Message, QueryMethod, RecordType, ResourceRecord};

#[test]
fn test_record_type_round_trip() {
    for mnemonic in ["A", "AAAA", "NS", "CNAME", "UNSET"] {
        let parsed = RecordType::from_str(mnemonic).expect("known mnemonic");
        assert_eq!(parsed.as_str(), mnemonic);
    }
}

#[test]
fn test_record_type_is_case_insensitive() {
    assert_eq!(RecordType::from_str("cname"), Ok(RecordType::CNAME));
    assert_eq!(RecordType::from_str("aaaa"), Ok(RecordType::AAAA));
}

#[test]
fn test_record_type_rejects_unknown_mnemonics() {
    assert!(RecordType::from_str("MX").is_err());
    assert!(RecordType::from_str("").is_err());
}

#[test]
fn test_referral_types() {
    assert!(RecordType::NS.is_referral());
    assert!(RecordType::CNAME.is_referral());
    assert!(!RecordType::A.is_referral());
    assert!(!RecordType::Unset.is_referral());
}

#[test]
fn test_record_display_is_zone_file_shaped() {
    let record = ResourceRecord::new("www.example.com", RecordType::A, 86400, "93.184.216.34");
    assert_eq!(record.to_string(), "www.example.com 86400 A IN 93.184.216.34");
}

#[test]
fn test_not_found_sentinel() {
    let sentinel = ResourceRecord::not_found("www.example.com");
    assert!(sentinel.is_not_found());
    assert_eq!(sentinel.owner, "www.example.com");
    assert_eq!(sentinel.record_type, RecordType::Unset);

    let answer = ResourceRecord::new("www.example.com", RecordType::A, 300, "1.2.3.4");
    assert!(!answer.is_not_found());
}

#[test]
fn test_iterative_message_envelope() {
    let message = Message::iterative("www.example.com", RecordType::AAAA);
    assert_eq!(message.method, QueryMethod::Iterative);
    assert_eq!(message.question.name, "www.example.com");
    assert_eq!(message.question.record_type, RecordType::AAAA);
    assert_eq!(message.method.to_string(), "ITERATIVE");
}
