use shub_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn second_init_reports_subscriber_error() {
    let _logger = Logger::builder()
        .name("shub-first")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("shub-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(matches!(err, LoggerError::Subscriber { .. }), "got {err}");
}

#[test]
fn disabled_outputs_are_rejected_before_install() {
    let err = Logger::builder().name("shub-silent").console(false).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
