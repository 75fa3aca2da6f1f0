// atsprobe/src/lib.rs

//! atsprobe
//!
//! Decoder for the vendor escape-command protocol spoken by uTrust/SCM
//! contactless readers. Escape commands expose ISO 14443 communication
//! parameters (supported bit rates, card type, ATS, negotiated rates) that
//! the standard PC/SC card API never surfaces.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
