use mshop_logger::{LogSettings, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_block_enables_json_file_output() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let settings: LogSettings = serde_json::from_value(serde_json::json!({
        "level": "info",
        "console": false,
        "path": log_dir,
        "json": true
    }))?;

    let logger = Logger::builder().name("integration-file-logging").settings(&settings)?.init()?;
    assert!(logger.guard().is_some());

    tracing::info!(domain = "supplier", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    let first = content.lines().next().expect("at least one line");
    let line: serde_json::Value = serde_json::from_str(first)?;
    assert_eq!(line["fields"]["domain"], "supplier");

    Ok(())
}
