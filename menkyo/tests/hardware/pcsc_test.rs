#![cfg(feature = "pcsc")]

#[path = "common.rs"]
mod common;

use std::time::Duration;

use menkyo::Result;
use menkyo::monitor::{Monitor, MonitorConfig};
use menkyo::session::CardBackend;
use menkyo::types::Presence;
use serial_test::serial;

// These tests need a PC/SC reader attached. They are marked `#[ignore]`
// so CI does not attempt to run them. Run manually with:
//
// cargo test -p menkyo --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
#[serial]
fn list_readers_and_poll() -> Result<()> {
    let Some((mut backend, readers)) = common::open_backend()? else {
        return Ok(());
    };
    let statuses = backend.wait_for_presence_change(&readers, Duration::from_millis(100))?;
    assert_eq!(statuses.len(), readers.len());
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn read_card_if_present() -> Result<()> {
    let Some((mut backend, readers)) = common::open_backend()? else {
        return Ok(());
    };
    let statuses = backend.wait_for_presence_change(&readers, Duration::from_millis(100))?;
    for status in statuses {
        if let Presence::Present(atr) = status.presence {
            let snapshot = menkyo::card::read_once(&mut backend, &status.reader)?;
            assert_eq!(snapshot.atr(), &atr);
        }
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn monitor_single_poll() -> Result<()> {
    let Some((backend, _)) = common::open_backend()? else {
        return Ok(());
    };
    let mut monitor = Monitor::new(backend, MonitorConfig::default())?;
    monitor.poll_once(&mut |outcome| {
        println!("{}: success={}", outcome.reader, outcome.is_success());
    })?;
    Ok(())
}
