#[path = "../common/mod.rs"]
mod common;

use menkyo::apdu::Command;
use menkyo::card::{LicenseFields, extract};
use menkyo::session::{CardBackend, MockBackend, MockCard};
use menkyo::test_support::{license_card, license_card_without_expiry};
use menkyo::Error;

fn run(card: MockCard) -> (menkyo::Result<()>, LicenseFields, Vec<Option<Command>>) {
    let mut backend = MockBackend::new(["r"]).with_card("r", card);
    let log = backend.log();
    let (mut session, _) = backend.connect("r").unwrap();
    let mut fields = LicenseFields::default();
    let res = extract(session.as_mut(), &mut fields);
    (res, fields, log.sent_commands())
}

const OK: [u8; 2] = [0x90, 0x00];

fn bare_license() -> MockCard {
    MockCard::new(&common::fixtures::license_atr()).reply(Command::SelectMasterFile, &OK)
}

#[test]
fn full_sequence_in_order() {
    let (res, fields, sent) = run(license_card(&common::fixtures::expiry()));
    res.unwrap();
    assert_eq!(fields.expiry_raw, common::fixtures::expiry());
    assert_eq!(fields.remaining_use_count.map(|c| c.get()), Some(3));
    assert_eq!(
        sent,
        vec![
            Some(Command::SelectMasterFile),
            Some(Command::QueryRemainingCount),
            Some(Command::SelectExpiryFile),
            Some(Command::ReadExpiry),
        ]
    );
}

#[test]
fn rejected_expiry_leaves_field_empty() {
    let (res, fields, _) = run(license_card_without_expiry());
    assert!(matches!(res, Err(Error::Protocol { .. })));
    assert!(fields.expiry_raw.is_empty());
    assert!(fields.remaining_use_count.is_some());
}

#[test]
fn expiry_file_select_failure_stops_before_read() {
    let card = bare_license()
        .reply(Command::QueryRemainingCount, &[0x63, 0xC3])
        .fail(Command::SelectExpiryFile)
        .reply(Command::ReadExpiry, &common::fixtures::with_sw(&[0x01], 0x90, 0x00));
    let (res, fields, sent) = run(card);
    assert!(res.unwrap_err().is_transport());
    assert!(fields.expiry_raw.is_empty());
    assert!(!sent.contains(&Some(Command::ReadExpiry)));
}

#[test]
fn remaining_count_taken_from_any_status() {
    let card = bare_license()
        .reply(Command::QueryRemainingCount, &[0x69, 0x8F])
        .reply(Command::SelectExpiryFile, &OK)
        .reply(Command::ReadExpiry, &common::fixtures::with_sw(&[0x01], 0x90, 0x00));
    let (_, fields, _) = run(card);
    assert_eq!(fields.remaining_use_count.map(|c| c.get()), Some(15));
}
