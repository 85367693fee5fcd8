use super::activity_log::LogEntry;
use super::messages::Message;
use super::report::Report;
use crate::msg_print;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints the end-of-session report: hours per category and the
    /// productivity ratio, two decimals each.
    pub fn report(report: &Report) -> Result<()> {
        msg_print!(Message::ReportHeader, true);
        msg_print!(Message::ReportWork(report.work_hours()));
        msg_print!(Message::ReportEntertainment(report.entertainment_hours()));
        msg_print!(Message::ReportUnknown(report.unknown_hours()));
        msg_print!(Message::ReportProductivity(report.productivity_ratio));
        Ok(())
    }

    pub fn entries(entries: &[LogEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "TIME", "ACTIVITY", "EDITOR", "BROWSER", "TERMINAL", "ENTERTAINMENT"]);
        for (index, entry) in entries.iter().enumerate() {
            table.add_row(row![
                index + 1,
                entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
                entry.verdict,
                entry.observation.has_text_editor,
                entry.observation.has_browser,
                entry.observation.has_terminal,
                entry.observation.has_entertainment
            ]);
        }
        table.printstd();

        Ok(())
    }
}
