#![cfg(feature = "pcsc")]

//! Show ATS and other ISO 14443 communication parameters of the card in a
//! uTrust reader.
//!
//! Usage:
//!   cargo run -p atsprobe --example ats_probe --features pcsc -- [-l] [-r READER]

use atsprobe::reader::Reader;
use atsprobe::transport::pcsc::PcscTransport;
use atsprobe::transport::Transport;
use atsprobe::types::{rate_list, FeatureTag};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut reader_name: Option<String> = None;
    let mut list_readers = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-r" => reader_name = args.next(),
            "-l" => list_readers = true,
            other => {
                eprintln!("unknown argument: {}", other);
                eprintln!("usage: ats_probe [-l] [-r READER]");
                std::process::exit(2);
            }
        }
    }

    if list_readers {
        println!("Available card terminals:");
        for name in PcscTransport::list_readers()? {
            println!(" {}", name);
        }
        return Ok(());
    }

    let transport = match &reader_name {
        Some(name) => PcscTransport::open_named(name)?,
        None => PcscTransport::open_first()?,
    };
    println!("Using reader \"{}\"", transport.name());

    let mut reader = match Reader::new(Box::new(transport)).probe(FeatureTag::ESCAPE) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let caps = reader.communication_capabilities()?;
    println!("Reader to card rates {}", rate_list(&caps.reader_to_card));
    println!("Card to reader rates {}", rate_list(&caps.card_to_reader));
    if caps.same_rate_required {
        println!("Same rate in both direction");
    } else {
        println!("Different rates in both direction");
    }
    println!("{}", caps.card_description());

    let ats = reader.answer_to_select()?;
    println!("ATS: {}", ats.to_hex());

    let rates = reader.negotiated_rates()?;
    println!(
        "Rates reader:card {}:{}",
        rates.reader_to_card, rates.card_to_reader
    );

    Ok(())
}
