#[path = "../common/mod.rs"]
mod common;

use atsprobe::protocol::find_control_code;
use atsprobe::types::FeatureTag;

#[test]
fn escape_entry_found_in_typical_directory() {
    let dir = common::fixtures::sample_directory();
    let code = find_control_code(&dir, FeatureTag::ESCAPE).unwrap();
    assert_eq!(code.as_u32(), common::fixtures::sample_escape_code());
}

#[test]
fn every_listed_tag_resolves_to_its_own_code() {
    let dir = common::fixtures::sample_directory();
    let verify = find_control_code(&dir, FeatureTag::VERIFY_PIN_DIRECT).unwrap();
    let modify = find_control_code(&dir, FeatureTag::MODIFY_PIN_DIRECT).unwrap();
    assert_eq!(verify.as_u32(), 0x0031_3508);
    assert_eq!(modify.as_u32(), 0x0031_350C);
}

#[test]
fn unknown_tag_is_not_found() {
    let dir = common::fixtures::sample_directory();
    assert!(find_control_code(&dir, FeatureTag::new(0x7F)).is_none());
}

#[test]
fn directories_shorter_than_one_entry_never_match() {
    for len in 0..6 {
        let dir = vec![0x13u8; len];
        assert!(
            find_control_code(&dir, FeatureTag::ESCAPE).is_none(),
            "len {} must not match",
            len
        );
    }
}

#[test]
fn entry_before_truncation_point_still_wins() {
    let mut dir = common::fixtures::sample_directory();
    // Chop the last entry in half; earlier entries stay reachable.
    dir.truncate(dir.len() - 3);
    let code = find_control_code(&dir, FeatureTag::ESCAPE).unwrap();
    assert_eq!(code.as_u32(), common::fixtures::sample_escape_code());
}
