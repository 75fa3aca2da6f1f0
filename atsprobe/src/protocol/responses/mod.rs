// atsprobe/src/protocol/responses/mod.rs

pub mod ats;
pub mod capabilities;
pub mod rates;

pub use ats::decode_ats;
pub use capabilities::decode_capabilities;
pub use rates::decode_negotiated_rates;

use crate::protocol::commands::EscapeCommand;

/// High-level response enum. Per-sub-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Decoded communication-status facts (0x11)
    CommunicationStatus(crate::types::CommunicationCapabilities),
    /// Verbatim ATS bytes (0x93)
    AnswerToSelect(crate::types::AnswerToSelect),
    /// Negotiated rate pair (0x9E)
    NegotiatedRates(crate::types::NegotiatedRates),
}

impl Response {
    /// Decode a raw escape response payload for the sub-command that
    /// produced it. Responses carry no echo of the sub-command byte, so the
    /// pairing is the caller's responsibility.
    pub fn decode(cmd: EscapeCommand, data: &[u8]) -> crate::Result<Self> {
        match cmd {
            EscapeCommand::CommunicationStatus => {
                Ok(Self::CommunicationStatus(decode_capabilities(data)?))
            }
            EscapeCommand::AnswerToSelect => Ok(Self::AnswerToSelect(decode_ats(data))),
            EscapeCommand::NegotiatedRates => {
                Ok(Self::NegotiatedRates(decode_negotiated_rates(data)?))
            }
        }
    }
}
