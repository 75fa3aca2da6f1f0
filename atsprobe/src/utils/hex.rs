//! Hexadecimal helpers used for ATS rendering and log output.
//!
//! The vendor tooling this crate interoperates with prints hex uppercase, so
//! the compact form here is uppercase as well.

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0x3B, 0x8F]` -> `"3B8F"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        use std::fmt::Write;
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Convert a byte slice to an uppercase hex string with a single space
/// between each byte. Used for debug log lines.
///
/// Example: `&[0x3B, 0x8F]` -> `"3B 8F"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        use std::fmt::Write;
        let _ = write!(&mut s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// Accepts upper or lower case, with or without ASCII whitespace. Returns an
/// error message string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    let mut out = Vec::with_capacity(cleaned.len() / 2);
    let bytes = cleaned.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let pair = std::str::from_utf8(&bytes[i..i + 2]).map_err(|e| e.to_string())?;
        let byte = u8::from_str_radix(pair, 16)
            .map_err(|e| format!("invalid hex pair '{}': {}", pair, e))?;
        out.push(byte);
        i += 2;
    }

    Ok(out)
}
