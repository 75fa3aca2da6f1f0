#[path = "../common/mod.rs"]
mod common;

use atsprobe::reader::Reader;
use atsprobe::transport::mock::MockTransport;
use atsprobe::types::FeatureTag;

#[test]
fn probe_transitions_and_exposes_escape_code() {
    let mut m = MockTransport::new();
    m.push_response(common::fixtures::sample_directory());

    let reader = Reader::new(Box::new(m));
    // Unprobed readers cannot issue escape commands; probe consumes the
    // handle and returns one that can.
    let probed = reader.probe(FeatureTag::ESCAPE).unwrap();
    assert_eq!(
        probed.escape_code().as_u32(),
        common::fixtures::sample_escape_code()
    );
    assert_eq!(probed.name(), "mock");
}

#[test]
fn probe_failure_keeps_nothing_usable() {
    let m = MockTransport::new(); // no directory queued -> query fails

    let err = Reader::new(Box::new(m))
        .probe(FeatureTag::ESCAPE)
        .err()
        .expect("probe must fail without a directory");
    assert!(matches!(err, atsprobe::Error::FeatureUnavailable));
}
