use taskdeck::config::LoggingConfig;
use taskdeck::logger::{init_file_logging, Logger};

#[test]
fn test_in_memory_log_order() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    // Newest entries come first for the logs dialog
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 2);
    assert!(logs[0].contains("second"));
    assert!(logs[1].contains("first"));
}

#[test]
fn test_clear_empties_the_feed() {
    let logger = Logger::new();
    logger.log("entry".to_string());
    logger.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_clones_share_the_feed() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("shared".to_string());
    assert_eq!(logger.get_logs().len(), 1);
}

#[test]
fn test_disabled_file_logging_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskdeck.log");

    let config = LoggingConfig {
        enabled: false,
        file: None,
    };
    init_file_logging(&config, &path).unwrap();

    assert!(!path.exists());
}
