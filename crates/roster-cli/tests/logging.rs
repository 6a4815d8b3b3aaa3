//! Redaction behavior of the logging setup.

use roster_cli::logging::{LogConfig, REDACTED_VALUE, init_logging_with_writer, redact_value};

#[test]
fn redaction_follows_log_data_flag() {
    // Before initialization PII stays redacted.
    assert_eq!(redact_value("a@b.com"), REDACTED_VALUE);

    let config = LogConfig {
        log_data: true,
        ..LogConfig::default()
    };
    init_logging_with_writer(&config, std::io::sink);
    assert_eq!(redact_value("a@b.com"), "a@b.com");
}
