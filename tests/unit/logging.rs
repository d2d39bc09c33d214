//! Unit tests for log format selection

use tradeloom::logging::{init_logging, LogFormat};

#[test]
fn test_production_environments_log_json() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("prod"), LogFormat::Json);
}

#[test]
fn test_other_environments_log_pretty() {
    assert_eq!(LogFormat::for_environment("development"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment("staging"), LogFormat::Pretty);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
}
