//! Utilities for atsprobe: small, reusable helpers used across the crate.

pub mod hex;

// Re-export the most common helpers at the `utils` module level so callers
// can use `crate::utils::bytes_to_hex(...)` etc if they prefer.
pub use hex::*;
