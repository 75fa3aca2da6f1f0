// atsprobe/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the control-transfer channel away from the
/// protocol logic.
///
/// The protocol is strictly synchronous: each call blocks until the reader
/// replies or the transport times out, and a reader connection is a
/// single-owner resource. Timeout and retry policy belong to the transport
/// and its caller, never to this crate's decoders.
pub trait Transport {
    /// Perform one control transfer: send `request` through `code` and
    /// return the raw response bytes.
    fn transmit_control(&mut self, code: u32, request: &[u8]) -> Result<Vec<u8>>;

    /// The reserved, transport-defined control code that answers the
    /// feature-directory query (PC/SC part 10 GET_FEATURE_REQUEST).
    fn feature_request_code(&self) -> u32;

    /// Human-readable name of the underlying reader, for log output.
    fn name(&self) -> &str;
}
