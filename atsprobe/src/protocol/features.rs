// atsprobe/src/protocol/features.rs

//! Feature-directory scanner.
//!
//! A reader answers the PC/SC part 10 GET_FEATURE_REQUEST with a directory
//! of fixed-width entries, `tag(1) reserved(1) control_code(4, big-endian)`.
//! The control code assigned to a tag may differ across operating-system
//! sessions, so the directory is scanned fresh each session and never cached.

use crate::constants::FEATURE_ENTRY_LEN;
use crate::protocol::parser;
use crate::types::{ControlCode, FeatureTag};

/// Scan a raw feature directory for `tag` and return its control code.
///
/// The buffer is walked in fixed 6-byte strides; the first entry whose tag
/// byte matches wins. The reserved byte is not validated. A trailing partial
/// entry (directory length not a multiple of 6) is expected and simply
/// unreachable; it never causes an out-of-bounds read. `None` means the tag
/// is not present in any complete entry.
pub fn find_control_code(directory: &[u8], tag: FeatureTag) -> Option<ControlCode> {
    for entry in directory.chunks_exact(FEATURE_ENTRY_LEN) {
        if entry[0] != tag.as_u8() {
            continue;
        }
        // chunks_exact guarantees the full entry is present, so the
        // bounds-checked read cannot fail here.
        let code = parser::be_u32_at(entry, 2).ok()?;
        return Some(ControlCode::new(code));
    }
    None
}
