#[path = "../common/mod.rs"]
mod common;

use atsprobe::test_support::probed_mock_reader;
use atsprobe::types::{rate_list, BitRate};

#[test]
fn full_fact_sequence_over_mock() {
    let mut reader = probed_mock_reader(
        common::fixtures::sample_escape_code(),
        vec![
            common::fixtures::dual_mode_type_b_status(),
            common::fixtures::sample_ats(),
            common::fixtures::negotiated_424_212(),
        ],
    )
    .unwrap();

    let caps = reader.communication_capabilities().unwrap();
    assert_eq!(rate_list(&caps.reader_to_card), "106,212,424,848");
    assert!(caps.same_rate_required);

    let ats = reader.answer_to_select().unwrap();
    assert_eq!(ats.to_hex(), "067577810280");

    let rates = reader.negotiated_rates().unwrap();
    assert_eq!(rates.reader_to_card, BitRate::Kbps424);
    assert_eq!(rates.card_to_reader, BitRate::Kbps212);
}

#[test]
fn facts_have_no_ordering_dependency() {
    // Same session, queried in a different order.
    let mut reader = probed_mock_reader(
        common::fixtures::sample_escape_code(),
        vec![
            common::fixtures::negotiated_424_212(),
            common::fixtures::tcl_type_a_status(),
        ],
    )
    .unwrap();

    let rates = reader.negotiated_rates().unwrap();
    assert_eq!(rates.card_to_reader, BitRate::Kbps212);

    let caps = reader.communication_capabilities().unwrap();
    assert_eq!(caps.card_description(), "T=CL ISO 14443-4 card (Type A)");
}

#[test]
fn empty_ats_is_a_valid_fact() {
    let mut reader =
        probed_mock_reader(common::fixtures::sample_escape_code(), vec![vec![]]).unwrap();
    let ats = reader.answer_to_select().unwrap();
    assert!(ats.is_empty());
    assert_eq!(ats.to_hex(), "");
}

#[test]
fn short_status_response_is_malformed() {
    let mut reader =
        probed_mock_reader(common::fixtures::sample_escape_code(), vec![vec![0x00]]).unwrap();
    let err = reader.communication_capabilities().unwrap_err();
    assert!(err.is_malformed());
}
