#[cfg(test)]
mod tests {
    use focuswatch::libs::activity_log::{ActivityLog, LogEntry};
    use focuswatch::libs::classifier::Verdict;
    use focuswatch::libs::export::{ExportFormat, Exporter};
    use focuswatch::libs::sampler::Observation;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
        log: ActivityLog,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let mut log = ActivityLog::in_memory();
            let editor = Observation {
                has_text_editor: true,
                ..Observation::default()
            };
            log.append(LogEntry::now(Verdict::Work, editor.clone())).unwrap();
            log.append(LogEntry::now(Verdict::Work, editor)).unwrap();
            log.append(LogEntry::now(Verdict::Entertainment, Observation::default())).unwrap();
            log.append(LogEntry::now(Verdict::Unknown, Observation::default())).unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                log,
            }
        }
    }

    #[test]
    fn test_default_output_name() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("focuswatch_export_"));
        assert!(name.ends_with(".xlsx"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_csv_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("session.csv");
        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&ctx.log, 300).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("ENTRIES"));
        assert_eq!(content.matches(",work,").count(), 2);
        assert!(content.contains("SUMMARY"));
        assert!(content.contains("Work Hours,0.17"));
        assert!(content.contains("Productivity,50.00%"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_json_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("session.json");
        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&ctx.log, 300).unwrap();

        let document: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document["report"]["work_seconds"], 600);
        assert_eq!(document["report"]["entertainment_seconds"], 300);
        assert_eq!(document["entries"].as_array().unwrap().len(), 4);
        assert_eq!(document["entries"][2]["activity_type"], "entertainment");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_excel_export(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("session.xlsx");
        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(&ctx.log, 300).unwrap();

        let bytes = fs::read(&path).unwrap();
        // xlsx is a zip archive.
        assert_eq!(&bytes[..2], b"PK");
    }
}
