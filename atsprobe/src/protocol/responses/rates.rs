// atsprobe/src/protocol/responses/rates.rs

use crate::constants::NEGOTIATED_RATES_MIN_LEN;
use crate::protocol::parser;
use crate::types::{BitRate, NegotiatedRates};
use crate::{Error, Result};

/// Decode a negotiated-rates response payload (sub-command 0x9E).
///
/// Byte 0 carries both directions: high nibble indexes the reader->card
/// rate, low nibble the card->reader rate, each into the ordered rate table
/// {0: 106, 1: 212, 2: 424, 3: 848}. An index outside the table is a
/// firmware defect and surfaces as `RateIndexOutOfRange`.
pub fn decode_negotiated_rates(data: &[u8]) -> Result<NegotiatedRates> {
    parser::ensure_len(data, NEGOTIATED_RATES_MIN_LEN)?;

    let byte = parser::byte_at(data, 0)?;
    let reader_index = byte >> 4;
    let card_index = byte & 0x0F;

    let reader_to_card = BitRate::from_index(reader_index).ok_or(Error::RateIndexOutOfRange {
        index: reader_index,
    })?;
    let card_to_reader =
        BitRate::from_index(card_index).ok_or(Error::RateIndexOutOfRange { index: card_index })?;

    Ok(NegotiatedRates {
        reader_to_card,
        card_to_reader,
    })
}
