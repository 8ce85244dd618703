//! Process-wide gate tests
//!
//! These tests share one gate, so each runs serially and starts from a reset state.

use std::sync::Arc;

use log::Level;
use serial_test::serial;

use ldap_log::{config, gate_log, gate_log_enabled, GateError, MemorySink, Verbosity};

/// Reset the shared gate and attach a fresh capturing sink
fn reset() -> Arc<MemorySink> {
    let sink = Arc::new(MemorySink::default());
    config::set_sink(sink.clone());
    config::set_verbosity_threshold(Verbosity::None).expect("reset verbosity");
    config::set_activation_level(Level::Debug).expect("reset activation");
    config::set_text_encoding("ascii").expect("reset encoding");
    sink.take();
    sink
}

/// NETWORK records are dropped under an ERROR threshold
#[test]
#[serial]
fn test_network_filtered_by_error_threshold() {
    let sink = reset();
    config::set_verbosity_threshold(Verbosity::Error).unwrap();
    sink.take();

    assert!(!config::is_enabled(Verbosity::Network));
    gate_log!(Verbosity::Network, "raw bytes {:?}", [0x30u8, 0x84]);
    assert!(sink.records().is_empty());
}

/// Verbosity threshold round-trips for every rank
#[test]
#[serial]
fn test_verbosity_round_trip() {
    reset();
    for verbosity in Verbosity::ALL {
        config::set_verbosity_threshold(verbosity).unwrap();
        assert_eq!(config::verbosity_threshold(), verbosity);
    }
}

/// Setting the same level twice equals setting it once
#[test]
#[serial]
fn test_set_verbosity_idempotent() {
    reset();
    config::set_verbosity_threshold(Verbosity::Basic).unwrap();
    let once = config::current_config();
    config::set_verbosity_threshold(Verbosity::Basic).unwrap();
    assert_eq!(config::current_config(), once);
}

/// PROTOCOL threshold enables BASIC but not NETWORK
#[test]
#[serial]
fn test_protocol_threshold() {
    reset();
    config::set_verbosity_threshold(Verbosity::Protocol).unwrap();

    assert!(gate_log_enabled!(Verbosity::Basic));
    assert!(gate_log_enabled!(Verbosity::Protocol));
    assert!(!gate_log_enabled!(Verbosity::Network));
}

/// Invalid activation value is reported, then rejected
#[test]
#[serial]
fn test_invalid_activation_threshold() {
    let sink = reset();
    config::set_verbosity_threshold(Verbosity::Error).unwrap();
    sink.take();
    let before = config::current_config();

    let result = config::set_activation_threshold(12345);
    assert!(matches!(result, Err(GateError::InvalidActivationLevel(_))));
    assert_eq!(config::current_config(), before);

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("ERROR:"));
    assert!(messages[0].contains("<12345>"));
}

/// Invalid verbosity value keeps the prior threshold
#[test]
#[serial]
fn test_invalid_verbosity_threshold() {
    reset();
    config::set_verbosity_threshold(Verbosity::Basic).unwrap();

    let result = config::set_verbosity_threshold(999u32);
    assert_eq!(result, Err(GateError::InvalidVerbosityLevel("999".to_string())));
    assert_eq!(config::verbosity_threshold(), Verbosity::Basic);
}

/// Unencodable characters are escaped, never fatal
#[test]
#[serial]
fn test_emit_escapes_unencodable_text() {
    let sink = reset();
    config::set_verbosity_threshold(Verbosity::Basic).unwrap();
    sink.take();

    gate_log!(Verbosity::Basic, "bind as <{}>", "cn=\u{00d8}ystein");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, Level::Debug);
    assert!(records[0].message.is_ascii());
    assert_eq!(records[0].text(), "BASIC:bind as <cn=\\u{d8}ystein>");
}

/// Non-ASCII text in the template itself is escaped as well
#[test]
#[serial]
fn test_emit_escapes_unencodable_template() {
    let sink = reset();
    config::set_verbosity_threshold(Verbosity::Basic).unwrap();
    sink.take();

    gate_log!(Verbosity::Basic, "search base \u{201c}{}\u{201d} \u{2713}", "o=test");

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].message.is_ascii());
    assert_eq!(records[0].text(), "BASIC:search base \\u{201c}o=test\\u{201d} \\u{2713}");
}

/// Records are written at the activation level
#[test]
#[serial]
fn test_records_use_activation_level() {
    let sink = reset();
    config::set_activation_level(Level::Warn).unwrap();
    config::set_verbosity_threshold(Verbosity::Network).unwrap();
    sink.take();

    assert_eq!(config::activation_threshold(), Level::Warn);
    gate_log!(Verbosity::Network, "received {} bytes", 14);
    assert_eq!(sink.records()[0].level, Level::Warn);
}

/// Initialization record is written to a newly attached sink
#[test]
#[serial]
fn test_initialize_with_sink_announces() {
    reset();
    let sink = Arc::new(MemorySink::new(Level::Info));
    config::initialize_with_sink(sink.clone());

    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("ldap3 library initialized"));
    assert!(messages[0].contains("NONE, ERROR, BASIC, PROTOCOL, NETWORK"));

    // Restore the no-op sink
    config::reset_sink();
    assert!(!config::is_enabled(Verbosity::None));
}

/// Concurrent emitters see consistent snapshots while thresholds change
#[test]
#[serial]
fn test_concurrent_emit_and_reconfigure() {
    let sink = reset();

    let writers: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                for n in 0..200 {
                    gate_log!(Verbosity::Basic, "worker {} message {}", i, n);
                }
            })
        })
        .collect();

    for n in 0..50 {
        let level = if n % 2 == 0 { Verbosity::Protocol } else { Verbosity::Error };
        config::set_verbosity_threshold(level).unwrap();
    }

    for writer in writers {
        writer.join().expect("writer panicked");
    }

    for message in sink.messages() {
        assert!(message.starts_with("BASIC:worker") || message.starts_with("ERROR:verbosity level set to"));
    }
}
