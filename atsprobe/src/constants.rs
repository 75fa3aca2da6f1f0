// atsprobe/src/constants.rs
//! Common protocol constants used across the crate

/// Width of one feature-directory entry: tag(1) + reserved(1) + code(4)
pub const FEATURE_ENTRY_LEN: usize = 6;

/// PC/SC part 10 function number for CM_IOCTL_GET_FEATURE_REQUEST.
/// The platform-specific SCARD_CTL_CODE encoding is applied by the transport.
pub const FEATURE_REQUEST_FUNCTION: u32 = 3400;

/// Escape sub-command: query communication capability flags
pub const ESC_COMMUNICATION_STATUS: u8 = 0x11;

/// Escape sub-command: read the Answer-To-Select returned by the card
pub const ESC_ANSWER_TO_SELECT: u8 = 0x93;

/// Escape sub-command: query the negotiated transmission rates
pub const ESC_NEGOTIATED_RATES: u8 = 0x9E;

/// Minimum response length for the communication-status sub-command
pub const COMMUNICATION_STATUS_MIN_LEN: usize = 3;

/// Minimum response length for the negotiated-rates sub-command
pub const NEGOTIATED_RATES_MIN_LEN: usize = 1;
