//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize MockTransport seeding and synthetic response
//! encoding so tests across the crate and tests/ directory can reuse the
//! same logic. The encoders are the inverse of the response decoders, which
//! keeps round-trip properties over the capability domain direct to state.
#![allow(dead_code)]

use crate::transport::mock::MockTransport;
use crate::transport::Transport;
use crate::types::{BitRate, CardSubType, FeatureTag, ProtocolClass};
use crate::{reader, Result};

/// Build a feature-directory buffer from `(tag, control code)` entries,
/// with a zero reserved byte and big-endian codes.
#[doc(hidden)]
pub fn feature_directory(entries: &[(FeatureTag, u32)]) -> Vec<u8> {
    let mut dir = Vec::with_capacity(entries.len() * 6);
    for (tag, code) in entries {
        dir.push(tag.as_u8());
        dir.push(0x00);
        dir.extend_from_slice(&code.to_be_bytes());
    }
    dir
}

/// Build a MockTransport pre-seeded with the given responses and return it
/// boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: a probed Reader backed by a MockTransport. The first queued
/// response is the feature directory answering the probe; the remaining
/// `responses` serve the escape transfers in order.
#[doc(hidden)]
pub fn probed_mock_reader(
    escape_code: u32,
    responses: Vec<Vec<u8>>,
) -> Result<reader::Reader<reader::Probed>> {
    let mut seeded = vec![feature_directory(&[(FeatureTag::ESCAPE, escape_code)])];
    seeded.extend(responses);
    let boxed = boxed_mock_with_responses(seeded);
    reader::Reader::new(boxed).probe(FeatureTag::ESCAPE)
}

/// Encode a synthetic communication-status response from decoded facts.
/// Inverse of `protocol::responses::decode_capabilities`; byte 0 is unused
/// on the wire and emitted as zero.
#[doc(hidden)]
pub fn encode_capabilities(
    reader_to_card: &[BitRate],
    card_to_reader: &[BitRate],
    same_rate_required: bool,
    class: ProtocolClass,
    sub_type: CardSubType,
) -> Vec<u8> {
    let mut flags = 0u8;
    for rate in reader_to_card {
        flags |= extra_rate_bit(*rate);
    }
    for rate in card_to_reader {
        flags |= extra_rate_bit(*rate) << 4;
    }
    if same_rate_required {
        flags |= 0x80;
    }
    let type_byte = (class.nibble() << 4) | sub_type.nibble();
    vec![0x00, flags, type_byte]
}

fn extra_rate_bit(rate: BitRate) -> u8 {
    match rate {
        BitRate::Kbps106 => 0, // implicit, never flagged
        BitRate::Kbps212 => 0x01,
        BitRate::Kbps424 => 0x02,
        BitRate::Kbps848 => 0x04,
    }
}

/// Encode a synthetic negotiated-rates response byte.
#[doc(hidden)]
pub fn encode_negotiated_rates(reader_to_card: BitRate, card_to_reader: BitRate) -> Vec<u8> {
    vec![(reader_to_card.index() << 4) | card_to_reader.index()]
}
