use std::fs;

use folio_logger::{FileOutput, Logger, LoggerError};
use serial_test::serial;
use tempfile::tempdir;

// Only one test in this binary may install the global subscriber; the rest
// must fail before `try_init` so they stay order-independent under a plain
// `cargo test` run.

#[test]
#[serial]
fn a_blank_name_is_rejected() {
    let result = Logger::builder().name("   ").init();
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
}

#[test]
#[serial]
fn an_unparsable_filter_is_rejected() {
    let result = Logger::builder().name("folio-test").env_filter("folio=notalevel").init();
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
}

#[test]
#[serial]
fn disabling_every_sink_is_rejected() {
    let result = Logger::builder().name("folio-test").console(false).init();
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
}

#[test]
#[serial]
fn zero_file_retention_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let result =
        Logger::builder().name("folio-test").file(FileOutput::new(dir.path()).keep(0)).init();
    assert!(matches!(result, Err(LoggerError::InvalidConfiguration { .. })));
}

#[test]
#[serial]
fn log_files_land_in_the_configured_directory() {
    let dir = tempdir().expect("tempdir");
    let logs = dir.path().join("logs");

    let logger = Logger::builder()
        .name("flight-recorder")
        .console(false)
        .env_filter("info")
        .file(FileOutput::new(&logs))
        .init()
        .expect("install subscriber");

    tracing::info!("one line for the file sink");
    // The guard flushes the background writer on drop.
    drop(logger);

    let mut entries = fs::read_dir(&logs).expect("read log directory").flatten();
    let written = entries.any(|entry| {
        let path = entry.path();
        path.extension().is_some_and(|ext| ext == "log")
            && path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("flight-recorder"))
    });
    assert!(written, "expected a flight-recorder.*.log file under {}", logs.display());
}
