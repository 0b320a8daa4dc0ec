use comment_rate::presentation::render;
use comment_rate_engine::config::ConfigBuilder;
use comment_rate_engine::options::OutputFormat;

use crate::common::{Workspace, fixtures};

fn render_fixture(format: OutputFormat) -> String {
    let ws = Workspace::new();
    let path = ws.write_file("Counter.java", fixtures::DOCUMENTED_JAVA);
    let config = ConfigBuilder::default()
        .path(path)
        .format(format)
        .build()
        .unwrap();
    let report = comment_rate_engine::run(&config).unwrap();
    render(&report, &config).unwrap()
}

#[test]
fn json_output_is_parseable() {
    let out = render_fixture(OutputFormat::Json);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["name"], "Counter.java");
    assert_eq!(json["total_lines"], 22);
    assert_eq!(json["method_comments"], 2);
    assert_eq!(json["class_comments"], 1);
    assert_eq!(json["comment_rate_display"], "41.18%");
    assert_eq!(json["grade"], "excellent");
    assert_eq!(json["color"], "#008000");
    assert!(json["mtime"].is_string());
}

#[test]
fn yaml_output_lists_counts() {
    let out = render_fixture(OutputFormat::Yaml);

    assert!(out.contains("effective_code_lines: 17"));
    assert!(out.contains("comment_lines: 7"));
}

#[test]
fn markdown_output_has_rate_row() {
    let out = render_fixture(OutputFormat::Md);

    assert!(out.contains("| Comment rate | 41.18% ✅ Excellent |"));
    assert!(out.contains("| Method comments | 2 |"));
}

#[test]
fn table_output_has_suggestion() {
    let out = render_fixture(OutputFormat::Table);

    assert!(out.contains("Counter.java"));
    assert!(out.contains("Class comments"));
    assert!(out.contains("Great comment rate!"));
}
