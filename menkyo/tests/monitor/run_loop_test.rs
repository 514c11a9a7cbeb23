#[path = "../common/mod.rs"]
mod common;

use common::helpers::present;
use menkyo::apdu::Command;
use menkyo::monitor::{Monitor, MonitorConfig, ReadOutcome, StopSignal};
use menkyo::session::MockBackend;
use menkyo::test_support::{LICENSE_ATR, fast_config, license_card, single_reader};
use menkyo::Error;

#[test]
fn run_stops_on_signal_from_callback() {
    let mut backend = single_reader("r", license_card(&[0x01]));
    present(&mut backend, "r", &LICENSE_ATR);
    let mut monitor = Monitor::new(backend, fast_config()).unwrap();
    let stop = monitor.stop_signal();

    let mut outcomes: Vec<ReadOutcome> = Vec::new();
    monitor.run(|o| {
        outcomes.push(o);
        stop.stop();
    });
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_success());
}

#[test]
fn external_stop_signal_ends_run() {
    let mut backend = single_reader("r", license_card(&[0x01]));
    present(&mut backend, "r", &LICENSE_ATR);
    let stop = StopSignal::new();
    let mut monitor = Monitor::new(backend, fast_config()).unwrap().with_stop_signal(stop.clone());
    assert!(!monitor.stop_signal().is_stopped());

    let mut delivered = 0;
    monitor.run(|_| {
        delivered += 1;
        stop.stop();
    });
    assert_eq!(delivered, 1);

    let backend = monitor.into_backend();
    assert_eq!(backend.log().connects(), 1);
    assert_eq!(backend.log().count(Command::EndTransparent), 1);
}

#[test]
fn poll_errors_do_not_end_the_loop() {
    let mut backend = single_reader("r", license_card(&[0x01]));
    backend.push_poll_error("SCARD_E_NO_SERVICE");
    backend.push_poll_error("SCARD_E_NO_SERVICE");
    present(&mut backend, "r", &LICENSE_ATR);
    let log = backend.log();
    let mut monitor = Monitor::new(backend, fast_config()).unwrap();
    let stop = monitor.stop_signal();

    let mut delivered = 0;
    monitor.run(|_| {
        delivered += 1;
        stop.stop();
    });
    assert_eq!(delivered, 1);
    assert_eq!(log.polls(), 3);
}

#[test]
fn reader_list_is_refreshed_after_poll_error() {
    let mut backend = MockBackend::new(["old"]).with_card("new", license_card(&[0x01]));
    backend.push_poll_error("reader unplugged");
    present(&mut backend, "new", &LICENSE_ATR);
    let mut monitor = Monitor::new(backend, fast_config()).unwrap();
    monitor.backend_mut().set_readers(["new"]);
    let stop = monitor.stop_signal();

    let mut outcomes = Vec::new();
    monitor.run(|o| {
        outcomes.push(o);
        stop.stop();
    });
    assert_eq!(monitor.readers(), ["new".to_string()]);
    assert!(monitor.slot("old").is_none());
    assert_eq!(outcomes[0].reader, "new");
    assert!(outcomes[0].is_success());
}

#[test]
fn failed_refresh_keeps_previous_readers() {
    let mut backend = single_reader("r", license_card(&[0x01]));
    backend.push_poll_error("transient");
    present(&mut backend, "r", &LICENSE_ATR);
    let mut monitor = Monitor::new(backend, fast_config()).unwrap();
    monitor.backend_mut().set_list_failures(1);
    let stop = monitor.stop_signal();

    monitor.run(|_| stop.stop());
    assert_eq!(monitor.readers(), ["r".to_string()]);
}

#[test]
fn connect_failure_is_retried() {
    let mut backend = single_reader("r", license_card(&[0x01]));
    backend.set_connect_failures(1);
    present(&mut backend, "r", &LICENSE_ATR);
    let mut monitor = Monitor::new(backend, fast_config()).unwrap();

    let outcomes = common::helpers::poll_n(&mut monitor, 1);
    assert!(outcomes[0].is_success());
    assert_eq!(monitor.slot("r").unwrap().attempts(), 2);
}

#[test]
fn monitor_needs_a_reader() {
    let backend = MockBackend::new(Vec::<String>::new());
    assert!(matches!(
        Monitor::new(backend, MonitorConfig::default()),
        Err(Error::NoReaders)
    ));
}
