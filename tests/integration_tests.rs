//! End-to-end tests across the utility modules and the classification core.

mod common;

use common::{RuntimeFailure, three_deep_io_chain};
use error_sieve::{
    contains_io_error, contains_type, message_contains, CatchAllProcessor, FailureProcessor,
    IndirectFailure, MessageMatchProcessor, PropertiesStore, SieveError, TypeMatchProcessor,
};
use std::error::Error;
use std::io::Write;

#[test]
fn test_three_deep_chain_classification() {
    let chain = three_deep_io_chain();
    let failure: Option<&(dyn Error + 'static)> = Some(&chain);

    assert!(contains_type::<common::IoFailure>(failure));
    assert!(!contains_type::<common::TimeoutFailure>(failure));
}

#[test]
fn test_wrapper_message_scenario() {
    // Wrapper constructed with its own message "alpha" around a target
    // whose message is "beta".
    let wrapper = IndirectFailure::new("alpha", Box::new(RuntimeFailure::new("beta")));

    assert!(!message_contains(Some(&wrapper), "alpha").unwrap());
    assert!(message_contains(Some(&wrapper), "beta").unwrap());
}

#[test]
fn test_unwrap_law_holds_for_processors() {
    let target = RuntimeFailure::new("beta");
    let wrapper = IndirectFailure::new("alpha", Box::new(RuntimeFailure::new("beta")));

    for needle in ["beta", "bet", "alpha", "nope"] {
        let processor = MessageMatchProcessor::new(needle).unwrap();
        assert_eq!(
            processor.is_applicable(Some(&wrapper)).unwrap(),
            processor.is_applicable(Some(&target)).unwrap(),
            "wrapper and target must classify identically for {needle:?}"
        );
    }
}

#[test]
fn test_classifying_a_real_file_open_failure() {
    // Opening a missing file yields an Io-wrapped failure that the type
    // processor recognizes through the cause chain.
    let error = error_sieve::files::open("/definitely/not/here.txt").unwrap_err();

    let io_processor = TypeMatchProcessor::new::<std::io::Error>();
    assert!(io_processor.is_applicable(error.source()).unwrap());
    assert!(contains_io_error(error.source()));

    let timeout_processor = TypeMatchProcessor::new::<common::TimeoutFailure>();
    assert!(!timeout_processor.is_applicable(error.source()).unwrap());

    assert!(CatchAllProcessor::new().is_applicable(error.source()).unwrap());
}

#[test]
fn test_properties_round_trip_through_file() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "host = \"example.com\"").unwrap();
    writeln!(tmp, "protocol = \"https\"").unwrap();

    let store = PropertiesStore::from_file(tmp.path()).unwrap();
    assert_eq!(store.get("host"), Some("example.com"));
    assert_eq!(store.get_or("missing", "default"), "default");

    // Properties feed the URL helpers.
    let base = error_sieve::urls::join_protocol_host(
        store.get("protocol").unwrap(),
        store.get("host").unwrap(),
    )
    .unwrap();
    assert_eq!(base, "https://example.com");
}

#[test]
fn test_missing_properties_file_is_classifiable() {
    let error = PropertiesStore::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(error, SieveError::PropertiesNotFound { .. }));

    // A not-found error is a leaf; it carries no io cause.
    assert!(!contains_io_error(error.source()));
    assert!(contains_type::<SieveError>(Some(&error)));
}

#[test]
fn test_url_reduction() {
    assert_eq!(
        error_sieve::urls::protocol_and_host_str("https://example.com:8443/api/v1?q=1").unwrap(),
        "https://example.com"
    );
}
