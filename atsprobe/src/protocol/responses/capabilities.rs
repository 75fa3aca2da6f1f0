// atsprobe/src/protocol/responses/capabilities.rs

use crate::constants::COMMUNICATION_STATUS_MIN_LEN;
use crate::protocol::parser;
use crate::types::{BitRate, CardSubType, CommunicationCapabilities, ProtocolClass};
use crate::Result;

/// Flag-byte bit assignments for the optional extra rates. 106Kbps is always
/// supported and never flagged, so it is not in this table.
pub(crate) const RATE_BITS: [(u8, BitRate); 3] = [
    (0x01, BitRate::Kbps212),
    (0x02, BitRate::Kbps424),
    (0x04, BitRate::Kbps848),
];

/// Card->reader rate bits sit four positions above the reader->card bits.
pub(crate) const CARD_TO_READER_SHIFT: u8 = 4;

/// Flag bit: reader requires the same rate in both directions.
pub(crate) const SAME_RATE_BIT: u8 = 0x80;

fn rates_from_flags(flags: u8, shift: u8) -> Vec<BitRate> {
    let mut rates = vec![BitRate::Kbps106];
    for (mask, rate) in RATE_BITS {
        if flags & (mask << shift) != 0 {
            rates.push(rate);
        }
    }
    rates
}

/// Decode a communication-status response payload (sub-command 0x11).
/// Layout: unused(1) + rate flags(1) + card type(1).
pub fn decode_capabilities(data: &[u8]) -> Result<CommunicationCapabilities> {
    parser::ensure_len(data, COMMUNICATION_STATUS_MIN_LEN)?;

    // Byte 0 is not interpreted by this decoder.
    let flags = parser::byte_at(data, 1)?;
    let type_byte = parser::byte_at(data, 2)?;

    Ok(CommunicationCapabilities {
        reader_to_card: rates_from_flags(flags, 0),
        card_to_reader: rates_from_flags(flags, CARD_TO_READER_SHIFT),
        same_rate_required: flags & SAME_RATE_BIT != 0,
        class: ProtocolClass::from_nibble(type_byte >> 4),
        sub_type: CardSubType::from_nibble(type_byte & 0x0F),
    })
}
