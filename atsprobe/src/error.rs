// atsprobe/src/error.rs

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no contactless reader found")]
    ReaderNotFound,

    /// The feature directory does not list the requested feature, or the
    /// directory query itself failed. Both mean the same thing to a caller:
    /// escape commands cannot be used on this reader.
    #[error(
        "reader does not support escape commands or they have been disabled by the host \
         (on Linux set ifdDriverOptions to 0x0001 in /etc/libccid_Info.plist, \
         on Windows see the DisableEscapeCommand driver policy)"
    )]
    FeatureUnavailable,

    // PC/SC 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("control transfer timed out")]
    Timeout,

    #[error("invalid response length: expected at least {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("rate index out of range: {index:#04x}")]
    RateIndexOutOfRange { index: u8 },
}

impl Error {
    /// True for failures of the control-transfer path itself. Callers should
    /// abort the remaining decode sequence on these.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::ReaderNotFound | Self::Transport(_) | Self::Timeout => true,
            #[cfg(feature = "pcsc")]
            Self::Pcsc(_) => true,
            _ => false,
        }
    }

    /// True for responses that arrived but do not match the protocol layout,
    /// indicating a firmware mismatch rather than a connectivity problem.
    /// A caller may skip the failed fact and still decode the others.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::RateIndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
