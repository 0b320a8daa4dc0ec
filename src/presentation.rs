// src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_FULL};
use comment_rate_core::Grade;
use comment_rate_engine::options::OutputFormat;
use comment_rate_engine::stats::FileReport;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Flattened, display-ready form of a [`FileReport`].
#[derive(Debug, Serialize)]
pub struct ReportView {
    pub path: PathBuf,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mtime: Option<String>,
    pub total_lines: usize,
    pub effective_code_lines: usize,
    pub blank_lines: usize,
    pub comment_lines: usize,
    pub method_comments: usize,
    pub class_comments: usize,
    pub comment_rate: f64,
    pub comment_rate_display: String,
    pub grade: Grade,
    pub emoji: &'static str,
    pub color: String,
    pub suggestion: &'static str,
}

impl From<&FileReport> for ReportView {
    fn from(report: &FileReport) -> Self {
        let result = &report.result;
        let grade = result.grade();
        let (r, g, b) = grade.color();
        Self {
            path: report.path.clone(),
            name: report.name.clone(),
            mtime: report.mtime.map(|t| t.to_rfc3339()),
            total_lines: result.total_lines(),
            effective_code_lines: result.effective_code_lines(),
            blank_lines: result.blank_lines(),
            comment_lines: result.comment_lines(),
            method_comments: result.method_comments(),
            class_comments: result.class_comments(),
            comment_rate: result.comment_rate(),
            comment_rate_display: format_rate(result.comment_rate()),
            grade,
            emoji: grade.emoji(),
            color: format!("#{r:02x}{g:02x}{b:02x}"),
            suggestion: grade.suggestion(),
        }
    }
}

/// Two decimals followed by `%`.
#[must_use]
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// Render a report in the configured format.
///
/// # Errors
///
/// Returns an error if JSON or YAML serialization fails.
pub fn render(report: &FileReport, config: &Config) -> Result<String> {
    let view = ReportView::from(report);
    match config.format {
        OutputFormat::Table => Ok(render_table(&view)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&view)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&view)?),
        OutputFormat::Md => {
            let mut buf = Vec::new();
            write_markdown(&mut buf, &view)?;
            Ok(String::from_utf8_lossy(&buf).into_owned())
        }
    }
}

/// Render and print to stdout.
///
/// # Errors
///
/// Returns an error if rendering fails or stdout cannot be written.
pub fn print_report(report: &FileReport, config: &Config) -> Result<()> {
    let rendered = render(report, config)?;
    let mut out = io::stdout().lock();
    writeln!(out, "{}", rendered.trim_end())?;
    out.flush()?;
    Ok(())
}

fn render_table(view: &ReportView) -> String {
    let (r, g, b) = view.grade.color();
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new(&view.name).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);

    for (label, value) in [
        ("Total lines", view.total_lines),
        ("Effective code lines", view.effective_code_lines),
        ("Comment lines", view.comment_lines),
        ("Method comments", view.method_comments),
        ("Class comments", view.class_comments),
    ] {
        table.add_row(vec![Cell::new(label), Cell::new(value)]);
    }

    table.add_row(vec![
        Cell::new("Comment rate").add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} {} {}",
            view.comment_rate_display, view.emoji, view.grade
        ))
        .add_attribute(Attribute::Bold)
        .fg(Color::Rgb { r, g, b }),
    ]);

    let mut out = format!("comment_rate v{}\n\n", crate::VERSION);
    out.push_str(&table.to_string());
    out.push_str("\n\n");
    out.push_str(view.suggestion);
    out.push('\n');
    out
}

fn write_markdown(out: &mut impl Write, view: &ReportView) -> io::Result<()> {
    let name = view.name.replace('|', "\\|");
    writeln!(out, "### Comment Rate: {name}\n")?;
    writeln!(out, "| Metric | Value |\n|:---|---:|")?;
    writeln!(out, "| Total lines | {} |", view.total_lines)?;
    writeln!(out, "| Effective code lines | {} |", view.effective_code_lines)?;
    writeln!(out, "| Comment lines | {} |", view.comment_lines)?;
    writeln!(out, "| Method comments | {} |", view.method_comments)?;
    writeln!(out, "| Class comments | {} |", view.class_comments)?;
    writeln!(
        out,
        "| Comment rate | {} {} {} |",
        view.comment_rate_display, view.emoji, view.grade
    )?;
    writeln!(out, "\n> {}", view.suggestion)?;
    Ok(())
}
