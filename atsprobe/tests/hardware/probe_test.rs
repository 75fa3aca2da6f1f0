#![cfg(feature = "pcsc")]

use atsprobe::reader::Reader;
use atsprobe::transport::pcsc::PcscTransport;
use atsprobe::types::FeatureTag;
use atsprobe::Result;
use serial_test::serial;

// These integration tests require a real uTrust reader with a contactless
// card in the field. They are marked `#[ignore]` so CI does not attempt to
// run them. Run manually with:
//
// cargo test -p atsprobe --test hardware --features pcsc -- --ignored

#[test]
#[serial]
#[ignore]
fn probe_escape_feature_on_attached_reader() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let transport = PcscTransport::open_first()?;
    let reader = Reader::new(Box::new(transport)).probe(FeatureTag::ESCAPE)?;
    // A freshly probed session always has a usable code.
    assert_ne!(reader.escape_code().as_u32(), 0);
    Ok(())
}

#[test]
#[serial]
#[ignore]
fn read_all_three_facts() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let transport = PcscTransport::open_first()?;
    let mut reader = Reader::new(Box::new(transport)).probe(FeatureTag::ESCAPE)?;

    let caps = reader.communication_capabilities()?;
    assert!(!caps.reader_to_card.is_empty());

    let ats = reader.answer_to_select()?;
    // Type B cards may legitimately return an empty ATS; just render it.
    let _ = ats.to_hex();

    let rates = reader.negotiated_rates()?;
    let _ = (rates.reader_to_card, rates.card_to_reader);
    Ok(())
}
