// fixtures.rs — provides commonly used test payloads/directories

use atsprobe::types::FeatureTag;

pub fn sample_escape_code() -> u32 {
    0x0031_3520
}

/// A feature directory listing PIN features around the escape entry, as a
/// CCID reader typically reports it.
pub fn sample_directory() -> Vec<u8> {
    atsprobe::test_support::feature_directory(&[
        (FeatureTag::VERIFY_PIN_DIRECT, 0x0031_3508),
        (FeatureTag::MODIFY_PIN_DIRECT, 0x0031_350C),
        (FeatureTag::ESCAPE, sample_escape_code()),
        (FeatureTag::IFD_PIN_PROPERTIES, 0x0031_3528),
    ])
}

/// Communication-status response: T=CL card, Type A, 106 only, rates may
/// differ.
pub fn tcl_type_a_status() -> Vec<u8> {
    vec![0x00, 0x00, 0x10]
}

/// Communication-status response: all reader->card rates, same rate
/// required, dual mode Type B.
pub fn dual_mode_type_b_status() -> Vec<u8> {
    vec![0x00, 0x87, 0x21]
}

/// A realistic Type A ATS (TL=06, T0=75, TA/TB/TC, historical byte).
pub fn sample_ats() -> Vec<u8> {
    hex::decode("067577810280").unwrap()
}

/// Negotiated rates byte: reader 424Kbps, card 212Kbps.
pub fn negotiated_424_212() -> Vec<u8> {
    vec![0x21]
}
