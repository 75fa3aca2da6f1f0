// atsprobe/src/reader/mod.rs

//! Reader handle with compile-time probe state.
//!
//! Escape commands are only usable after the escape control code has been
//! discovered, so the handle is a type-state pair: `Reader<Unprobed>` can
//! only probe, `Reader<Probed>` carries the discovered code in its state
//! value and exposes the three fact queries.

use log::{debug, warn};

use crate::protocol::commands::EscapeCommand;
use crate::protocol::features::find_control_code;
use crate::transport::Transport;
use crate::types::{
    AnswerToSelect, CommunicationCapabilities, ControlCode, FeatureTag, NegotiatedRates,
};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// State of a reader whose feature directory has not been queried yet.
pub struct Unprobed;

/// State of a reader with a discovered escape control code.
pub struct Probed {
    escape_code: ControlCode,
}

/// Reader handle that enforces feature discovery at compile time.
pub struct Reader<State = Unprobed> {
    transport: Box<dyn Transport>,
    state: State,
}

impl Reader<Unprobed> {
    /// Wrap an open transport. No I/O happens until `probe`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            state: Unprobed,
        }
    }

    /// Query the feature directory and locate the control code for `tag`.
    ///
    /// A failed directory query and an absent tag both mean the reader does
    /// not support (or the host has disabled) the feature, and collapse to
    /// `Error::FeatureUnavailable`. Codes are session-scoped, so this runs
    /// once per connection and is never cached across sessions.
    pub fn probe(mut self, tag: FeatureTag) -> Result<Reader<Probed>> {
        let request_code = self.transport.feature_request_code();
        let directory = match self.transport.transmit_control(request_code, &[]) {
            Ok(dir) => dir,
            Err(e) => {
                warn!(
                    "feature directory query failed on \"{}\": {}",
                    self.transport.name(),
                    e
                );
                return Err(Error::FeatureUnavailable);
            }
        };
        debug!("feature directory: {}", bytes_to_hex_spaced(&directory));

        let escape_code =
            find_control_code(&directory, tag).ok_or(Error::FeatureUnavailable)?;
        debug!(
            "feature {:#04x} -> control code {}",
            tag.as_u8(),
            escape_code
        );

        Ok(Reader {
            transport: self.transport,
            state: Probed { escape_code },
        })
    }
}

impl Reader<Probed> {
    /// The discovered escape control code.
    pub fn escape_code(&self) -> ControlCode {
        self.state.escape_code
    }

    /// Name of the underlying reader.
    pub fn name(&self) -> &str {
        self.transport.name()
    }

    /// One blocking escape exchange. No retries: a failed or malformed
    /// exchange is reported once and retry policy stays with the caller.
    fn escape(&mut self, cmd: EscapeCommand) -> Result<Vec<u8>> {
        self.transport
            .transmit_control(self.state.escape_code.as_u32(), &cmd.encode())
    }

    /// Query and decode the communication capability flags (0x11).
    pub fn communication_capabilities(&mut self) -> Result<CommunicationCapabilities> {
        let rsp = self.escape(EscapeCommand::CommunicationStatus)?;
        crate::protocol::responses::decode_capabilities(&rsp)
    }

    /// Fetch the raw Answer-To-Select (0x93).
    pub fn answer_to_select(&mut self) -> Result<AnswerToSelect> {
        let rsp = self.escape(EscapeCommand::AnswerToSelect)?;
        Ok(crate::protocol::responses::decode_ats(&rsp))
    }

    /// Query and decode the negotiated transmission rates (0x9E).
    pub fn negotiated_rates(&mut self) -> Result<NegotiatedRates> {
        let rsp = self.escape(EscapeCommand::NegotiatedRates)?;
        crate::protocol::responses::decode_negotiated_rates(&rsp)
    }
}
