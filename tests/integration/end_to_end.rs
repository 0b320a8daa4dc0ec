use comment_rate_core::Grade;
use comment_rate_engine::config::{Config, ConfigBuilder};
use comment_rate_engine::error::EngineError;
use comment_rate_engine::options::DocScan;

use crate::common::{Workspace, fixtures};

fn config_for(path: std::path::PathBuf) -> Config {
    ConfigBuilder::default().path(path).build().unwrap()
}

#[test]
fn documented_java_file_is_excellent() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::DOCUMENTED_JAVA);

    let report = comment_rate_engine::run(&config_for(path)).unwrap();
    let result = &report.result;

    assert_eq!(report.name, "Counter.java");
    assert_eq!(result.total_lines(), 22);
    assert_eq!(result.blank_lines(), 5);
    assert_eq!(result.effective_code_lines(), 17);
    assert_eq!(result.comment_lines(), 7);
    assert_eq!(result.comment_rate(), 700.0 / 17.0);
    assert_eq!(result.method_comments(), 2);
    assert_eq!(result.class_comments(), 1);
    assert_eq!(result.grade(), Grade::Excellent);
}

#[test]
fn bare_java_file_is_low() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::BARE_JAVA);

    let report = comment_rate_engine::run(&config_for(path)).unwrap();

    assert_eq!(report.result.total_lines(), 13);
    assert_eq!(report.result.effective_code_lines(), 10);
    assert_eq!(report.result.comment_rate(), 0.0);
    assert_eq!(report.result.method_comments(), 0);
    assert_eq!(report.grade(), Grade::Low);
}

#[test]
fn mixed_lines_match_classifier_trace() {
    let ws = Workspace::new();
    let path = ws.write_file("Mixed.java", fixtures::MIXED_LINES);

    let report = comment_rate_engine::run(&config_for(path)).unwrap();

    assert_eq!(report.result.total_lines(), 6);
    assert_eq!(report.result.effective_code_lines(), 4);
    assert_eq!(report.result.comment_lines(), 3);
    assert_eq!(report.result.comment_rate(), 75.0);
}

#[test]
fn empty_file_yields_zero_rate() {
    let ws = Workspace::new();
    let path = ws.write_file("Empty.java", "");

    let report = comment_rate_engine::run(&config_for(path)).unwrap();

    assert_eq!(report.result.total_lines(), 0);
    assert_eq!(report.result.comment_rate(), 0.0);
    assert_eq!(report.grade(), Grade::Low);
}

#[test]
fn disabling_doc_scan_keeps_line_counts() {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::DOCUMENTED_JAVA);

    let scanned = comment_rate_engine::run(&config_for(path.clone())).unwrap();
    let config = ConfigBuilder::default()
        .path(path)
        .doc_scan(DocScan::Disabled)
        .build()
        .unwrap();
    let unscanned = comment_rate_engine::run(&config).unwrap();

    assert_eq!(unscanned.result.method_comments(), 0);
    assert_eq!(unscanned.result.class_comments(), 0);
    assert_eq!(
        unscanned.result.comment_rate(),
        scanned.result.comment_rate()
    );
}

#[test]
fn non_java_file_is_rejected_by_default() {
    let ws = Workspace::new();
    let path = ws.write_file("notes.md", "# title\n");

    let err = comment_rate_engine::run(&config_for(path)).unwrap_err();
    assert!(matches!(err, EngineError::ExtensionNotAllowed(_)));
}

#[test]
fn binary_file_is_rejected() {
    let ws = Workspace::new();
    let path = ws.write_bytes("Blob.java", b"\x00\x01\x02");

    let err = comment_rate_engine::run(&config_for(path)).unwrap_err();
    assert!(matches!(err, EngineError::Binary(_)));
}

#[test]
fn crlf_line_endings_are_handled() {
    let ws = Workspace::new();
    let path = ws.write_file("Crlf.java", "// one\r\nint a;\r\n\r\n");

    let report = comment_rate_engine::run(&config_for(path)).unwrap();

    assert_eq!(report.result.total_lines(), 2);
    assert_eq!(report.result.effective_code_lines(), 2);
    assert_eq!(report.result.comment_rate(), 50.0);
}
