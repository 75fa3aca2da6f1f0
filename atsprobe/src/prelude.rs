// atsprobe/src/prelude.rs

pub use crate::protocol::{EscapeCommand, Response};
pub use crate::reader::{Probed, Reader, Unprobed};
pub use crate::transport::Transport;
pub use crate::{
    AnswerToSelect, BitRate, CardSubType, CommunicationCapabilities, ControlCode, Error,
    FeatureTag, NegotiatedRates, ProtocolClass, Result,
};

// Re-export small utilities for convenience
pub use crate::types::rate_list;
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, parse_hex};
