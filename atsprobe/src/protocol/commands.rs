// atsprobe/src/protocol/commands.rs

use crate::constants::{ESC_ANSWER_TO_SELECT, ESC_COMMUNICATION_STATUS, ESC_NEGOTIATED_RATES};

/// High-level escape command enum. Each escape request is a single
/// sub-command byte sent through the discovered control code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeCommand {
    /// Communication capability flags and card type (0x11)
    CommunicationStatus,
    /// Raw Answer-To-Select bytes (0x93)
    AnswerToSelect,
    /// Currently negotiated transmission rates (0x9E)
    NegotiatedRates,
}

impl EscapeCommand {
    /// Return the vendor sub-command byte.
    pub fn command_byte(&self) -> u8 {
        match self {
            Self::CommunicationStatus => ESC_COMMUNICATION_STATUS,
            Self::AnswerToSelect => ESC_ANSWER_TO_SELECT,
            Self::NegotiatedRates => ESC_NEGOTIATED_RATES,
        }
    }

    /// Encode the command into the raw request payload.
    pub fn encode(&self) -> Vec<u8> {
        vec![self.command_byte()]
    }
}
