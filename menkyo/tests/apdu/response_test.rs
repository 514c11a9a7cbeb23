#[path = "../common/mod.rs"]
mod common;

use menkyo::Error;
use menkyo::apdu::ApduResponse;

#[test]
fn success_response_splits_payload() {
    let raw = common::fixtures::with_sw(&common::fixtures::idm(), 0x90, 0x00);
    let resp = ApduResponse::from_raw(&raw).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data(), common::fixtures::idm().as_slice());
    assert_eq!(resp.status().to_string(), "9000");
}

#[test]
fn rejected_response_still_carries_payload() {
    let resp = ApduResponse::from_raw(&[0x01, 0x02, 0x6A, 0x82]).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.data(), &[0x01, 0x02]);
    assert_eq!((resp.sw1(), resp.sw2()), (0x6A, 0x82));

    let err = resp.success_data("READ_EXPIRE").unwrap_err();
    assert!(matches!(
        err,
        Error::Protocol {
            command: "READ_EXPIRE",
            sw1: 0x6A,
            sw2: 0x82
        }
    ));
}

#[test]
fn short_responses_are_transport_errors() {
    for raw in [&[][..], &[0x90][..]] {
        let err = ApduResponse::from_raw(raw).unwrap_err();
        assert!(matches!(err, Error::ResponseTooShort { .. }));
        assert!(err.is_transport());
    }
}

#[test]
fn status_only_response_has_empty_payload() {
    let resp = ApduResponse::from_raw(&[0x63, 0xC2]).unwrap();
    assert!(resp.data().is_empty());
}
