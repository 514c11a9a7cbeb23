#[path = "../common/mod.rs"]
mod common;

use menkyo::apdu::Command;
use menkyo::card::read_once;
use menkyo::session::{MockBackend, MockCard};
use menkyo::test_support::{
    CONTACTLESS_ATR, felica_card, license_card, single_reader, vehicle_inspection_card,
};
use menkyo::{CardType, Error};

#[test]
fn license_snapshot() {
    let mut backend = single_reader("reader-0", license_card(&common::fixtures::expiry()));
    let snap = read_once(&mut backend, "reader-0").unwrap();

    assert_eq!(snap.card_type(), CardType::DriverLicense);
    assert_eq!(snap.atr().to_hex(), common::fixtures::LICENSE_ATR_HEX.to_lowercase());
    assert_eq!(
        snap.expiry_date_raw(),
        Some(common::fixtures::EXPIRY_HEX.to_lowercase())
    );
    assert_eq!(
        snap.card_id().as_str(),
        format!("{}{}", common::fixtures::LICENSE_ATR_HEX, common::fixtures::EXPIRY_HEX)
    );
    assert!(snap.is_complete());
}

#[test]
fn vehicle_inspection_is_identified_by_idm() {
    let idm = common::fixtures::idm();
    let mut backend = single_reader("reader-0", vehicle_inspection_card(&idm));
    let log = backend.log();
    let snap = read_once(&mut backend, "reader-0").unwrap();

    assert_eq!(snap.card_type(), CardType::VehicleInspection);
    assert_eq!(snap.card_id().as_str(), common::fixtures::IDM_HEX);
    assert_eq!(snap.expiry_date_raw(), None);
    assert_eq!(log.count(Command::SelectMasterFile), 0);
}

#[test]
fn felica_card_snapshot() {
    let idm = common::fixtures::idm();
    let mut backend = single_reader("reader-0", felica_card(&idm));
    let snap = read_once(&mut backend, "reader-0").unwrap();
    assert_eq!(snap.card_type(), CardType::Other);
    assert_eq!(snap.contactless_id(), Some(common::fixtures::IDM_HEX.to_lowercase()));
    assert_eq!(snap.card_type().to_string(), "other");
}

#[test]
fn contactless_id_survives_failed_select() {
    let ok = [0x90, 0x00];
    let card = MockCard::new(&CONTACTLESS_ATR)
        .reply(Command::Start, &ok)
        .reply(Command::StartTransparent, &ok)
        .reply(Command::SwitchContactless, &ok)
        .fail(Command::SelectContactless)
        .reply(
            Command::GetContactlessId,
            &common::fixtures::with_sw(&common::fixtures::idm(), 0x90, 0x00),
        );
    let mut backend = single_reader("reader-0", card);
    let log = backend.log();
    let snap = read_once(&mut backend, "reader-0").unwrap();

    assert_eq!(log.count(Command::GetContactlessId), 1);
    assert_eq!(snap.card_type(), CardType::Other);
    assert_eq!(snap.card_id().as_str(), common::fixtures::IDM_HEX);
}

#[test]
fn session_is_always_released() {
    let mut backend = single_reader("reader-0", license_card(&[0x01]));
    let log = backend.log();
    read_once(&mut backend, "reader-0").unwrap();
    read_once(&mut backend, "reader-0").unwrap();

    assert_eq!(log.connects(), 2);
    assert_eq!(log.disconnects(), 2);
    assert_eq!(log.count(Command::EndTransparent), 2);

    log.clear();
    backend.remove_card("reader-0");
    let err = read_once(&mut backend, "reader-0").unwrap_err();
    assert!(matches!(err, Error::Connect { .. }));
    assert!(log.sent().is_empty());
    assert_eq!(log.connects(), 0);
}

#[test]
fn missing_card_is_connect_error() {
    let mut backend = MockBackend::new(["reader-0"]);
    let err = read_once(&mut backend, "reader-0").unwrap_err();
    assert!(matches!(err, Error::Connect { .. }));
}
