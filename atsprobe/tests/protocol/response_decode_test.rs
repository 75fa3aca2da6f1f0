#[path = "../common/mod.rs"]
mod common;

use atsprobe::protocol::{EscapeCommand, Response};
use atsprobe::types::{rate_list, BitRate, CardSubType, ProtocolClass};

#[test]
fn communication_status_decodes_to_capability_variant() {
    let rsp = Response::decode(
        EscapeCommand::CommunicationStatus,
        &common::fixtures::tcl_type_a_status(),
    )
    .unwrap();
    match rsp {
        Response::CommunicationStatus(caps) => {
            assert_eq!(rate_list(&caps.reader_to_card), "106");
            assert_eq!(rate_list(&caps.card_to_reader), "106");
            assert!(!caps.same_rate_required);
            assert_eq!(caps.card_description(), "T=CL ISO 14443-4 card (Type A)");
        }
        other => panic!("expected capabilities, got {:?}", other),
    }
}

#[test]
fn dual_mode_type_b_status_decodes() {
    let rsp = Response::decode(
        EscapeCommand::CommunicationStatus,
        &common::fixtures::dual_mode_type_b_status(),
    )
    .unwrap();
    match rsp {
        Response::CommunicationStatus(caps) => {
            assert_eq!(rate_list(&caps.reader_to_card), "106,212,424,848");
            assert_eq!(rate_list(&caps.card_to_reader), "106");
            assert!(caps.same_rate_required);
            assert_eq!(caps.class, ProtocolClass::DualMode);
            assert_eq!(caps.sub_type, CardSubType::TypeB);
        }
        other => panic!("expected capabilities, got {:?}", other),
    }
}

#[test]
fn ats_decodes_verbatim_and_renders_uppercase() {
    let ats_bytes = common::fixtures::sample_ats();
    match Response::decode(EscapeCommand::AnswerToSelect, &ats_bytes).unwrap() {
        Response::AnswerToSelect(ats) => {
            assert_eq!(ats.as_bytes(), &ats_bytes[..]);
            assert_eq!(ats.to_hex(), "067577810280");
        }
        other => panic!("expected ATS, got {:?}", other),
    }
}

#[test]
fn negotiated_rates_decode() {
    match Response::decode(
        EscapeCommand::NegotiatedRates,
        &common::fixtures::negotiated_424_212(),
    )
    .unwrap()
    {
        Response::NegotiatedRates(rates) => {
            assert_eq!(rates.reader_to_card, BitRate::Kbps424);
            assert_eq!(rates.card_to_reader, BitRate::Kbps212);
        }
        other => panic!("expected rates, got {:?}", other),
    }
}

#[test]
fn malformed_rate_byte_is_a_decode_error_not_a_transport_error() {
    let err = Response::decode(EscapeCommand::NegotiatedRates, &[0xF0]).unwrap_err();
    assert!(err.is_malformed());
    assert!(!err.is_transport());
}
