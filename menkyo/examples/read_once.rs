// Single read of every card currently sitting in a reader.
//
// Run with: cargo run -p menkyo --example read_once --features pcsc

use std::time::Duration;

use menkyo::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut backend = PcscBackend::establish()?;
    let readers = backend.list_readers()?;
    if readers.is_empty() {
        anyhow::bail!("no card readers found");
    }
    for (i, r) in readers.iter().enumerate() {
        println!("reader {}: {}", i, r);
    }

    let statuses = backend.wait_for_presence_change(&readers, Duration::from_millis(100))?;
    for status in statuses {
        if !matches!(status.presence, Presence::Present(_)) {
            println!("{}: no card", status.reader);
            continue;
        }
        match read_once(&mut backend, &status.reader) {
            Ok(snap) => print_snapshot(&snap),
            Err(e) => println!("{}: read failed: {}", status.reader, e),
        }
    }
    Ok(())
}

fn print_snapshot(snap: &CardSnapshot) {
    println!("{}:", snap.reader());
    println!("  type      : {}", snap.card_type());
    println!("  atr       : {}", snap.atr().to_hex());
    if let Some(expiry) = snap.expiry_date_raw() {
        println!("  expiry    : {}", expiry);
    }
    if let Some(count) = snap.remaining_use_count() {
        println!("  remaining : {}", count);
    }
    if let Some(idm) = snap.contactless_id() {
        println!("  idm       : {}", idm);
    }
    println!("  card id   : {}", snap.card_id());
}
