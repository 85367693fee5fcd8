//! Export of a recorded session for external analysis.
//!
//! Writes every log entry of a session together with its report summary.
//!
//! ## Formats
//!
//! - **CSV**: an entries section followed by a summary section
//! - **JSON**: `{ "report": {...}, "entries": [...] }`, pretty-printed
//! - **Excel**: one worksheet with bold section headers and auto-fitted columns
//!
//! ```rust,no_run
//! use focuswatch::libs::activity_log::ActivityLog;
//! use focuswatch::libs::export::{ExportFormat, Exporter};
//! use std::path::Path;
//!
//! let log = ActivityLog::load(Path::new("activity_log.json"))?;
//! Exporter::new(ExportFormat::Csv, None).export(&log, 300)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::activity_log::{ActivityLog, LogEntry};
use crate::libs::formatter::{format_hours, format_percent};
use crate::libs::report::{self, Report};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    report: Report,
    entries: &'a [LogEntry],
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named
    /// `focuswatch_export_YYYYMMDD_HHMMSS.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "focuswatch_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, log: &ActivityLog, interval_seconds: u64) -> Result<()> {
        let report = report::generate(log.all(), interval_seconds);
        match self.format {
            ExportFormat::Csv => self.export_csv(log.all(), &report),
            ExportFormat::Json => self.export_json(log.all(), &report),
            ExportFormat::Excel => self.export_excel(log.all(), &report),
        }
    }

    fn export_csv(&self, entries: &[LogEntry], report: &Report) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["ENTRIES", "", "", "", "", ""])?;
        wtr.write_record(["Timestamp", "Activity", "Text Editor", "Browser", "Terminal", "Entertainment"])?;
        for entry in entries {
            wtr.write_record([
                entry.timestamp.to_rfc3339(),
                entry.verdict.to_string(),
                entry.observation.has_text_editor.to_string(),
                entry.observation.has_browser.to_string(),
                entry.observation.has_terminal.to_string(),
                entry.observation.has_entertainment.to_string(),
            ])?;
        }

        wtr.write_record(["", "", "", "", "", ""])?;
        wtr.write_record(["SUMMARY", "", "", "", "", ""])?;
        for (label, value) in summary_rows(report) {
            wtr.write_record([label, value.as_str(), "", "", "", ""])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, entries: &[LogEntry], report: &Report) -> Result<()> {
        let document = ExportDocument { report: *report, entries };
        let json = serde_json::to_string_pretty(&document)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, entries: &[LogEntry], report: &Report) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "ENTRIES", &header_format)?;
        let headers = ["Timestamp", "Activity", "Text Editor", "Browser", "Terminal", "Entertainment"];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(1, col as u16, *header, &header_format)?;
        }

        let mut row = 2;
        for entry in entries {
            worksheet.write_string(row, 0, entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())?;
            worksheet.write_string(row, 1, entry.verdict.as_str())?;
            worksheet.write_boolean(row, 2, entry.observation.has_text_editor)?;
            worksheet.write_boolean(row, 3, entry.observation.has_browser)?;
            worksheet.write_boolean(row, 4, entry.observation.has_terminal)?;
            worksheet.write_boolean(row, 5, entry.observation.has_entertainment)?;
            row += 1;
        }

        row += 2;
        worksheet.write_string_with_format(row, 0, "SUMMARY", &header_format)?;
        for (label, value) in summary_rows(report) {
            row += 1;
            worksheet.write_string(row, 0, label)?;
            worksheet.write_string(row, 1, value)?;
        }

        worksheet.autofit();

        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn summary_rows(report: &Report) -> [(&'static str, String); 4] {
    [
        ("Work Hours", format_hours(report.work_hours())),
        ("Entertainment Hours", format_hours(report.entertainment_hours())),
        ("Unknown Hours", format_hours(report.unknown_hours())),
        ("Productivity", format_percent(report.productivity_ratio)),
    ]
}
