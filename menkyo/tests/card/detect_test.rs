#[path = "../common/mod.rs"]
mod common;

use menkyo::apdu::Command;
use menkyo::card::detect;
use menkyo::session::{CardBackend, MockBackend, MockCard};
use menkyo::test_support::CONTACTLESS_ATR;
use menkyo::{Atr, CardType};

fn detect_with(card: MockCard) -> CardType {
    let atr = Atr::from_bytes(card.atr());
    let mut backend = MockBackend::new(["r"]).with_card("r", card);
    let (mut session, _) = backend.connect("r").unwrap();
    detect(session.as_mut(), &atr)
}

#[test]
fn marker_response_beats_license_atr() {
    let marker = common::fixtures::decode("067877810280");
    // The check is judged on its data alone; the status word is ignored.
    let card = MockCard::new(&common::fixtures::license_atr()).reply(
        Command::CheckVehicleInspection,
        &common::fixtures::with_sw(&marker, 0x6A, 0x81),
    );
    assert_eq!(detect_with(card), CardType::VehicleInspection);
}

#[test]
fn check_transport_error_falls_through_to_atr() {
    let card = MockCard::new(&common::fixtures::license_atr()).fail(Command::CheckVehicleInspection);
    assert_eq!(detect_with(card), CardType::DriverLicense);
}

#[test]
fn unknown_card_is_other() {
    let card = MockCard::new(&CONTACTLESS_ATR);
    assert_eq!(detect_with(card), CardType::Other);
}
