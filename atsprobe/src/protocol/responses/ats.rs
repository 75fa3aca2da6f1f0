// atsprobe/src/protocol/responses/ats.rs

use crate::types::AnswerToSelect;

/// Decode an ATS response payload (sub-command 0x93).
///
/// The whole payload is the Answer-To-Select, taken verbatim. There is no
/// minimum length; a card that returned no ATS yields an empty value.
pub fn decode_ats(data: &[u8]) -> AnswerToSelect {
    AnswerToSelect::from_bytes(data.to_vec())
}
