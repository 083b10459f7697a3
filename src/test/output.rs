use std::path::{Path, PathBuf};
use crate::test::document::ConvertedRun;

/// Write a converted run to `<dir>/<id>-<date>.json`. Returns the file path.
pub fn write_report(dir: &Path, source: &str, run: &ConvertedRun) -> crate::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;

    let run_id = uuid::Uuid::new_v4().to_string().split('-').next().unwrap_or("unknown").to_string();
    let date = chrono::Utc::now().format("%Y-%m-%d");
    let path = dir.join(format!("{}-{}.json", run_id, date));

    let report = serde_json::json!({
        "source": source,
        "generatedAt": chrono::Utc::now().to_rfc3339(),
        "cases": run.cases,
        "results": run.results,
        "rejected": run.rejected,
    });

    std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use crate::test::host::*;

    #[test]
    fn test_write_report_file() {
        let case = Arc::new(HostTestCase::bare("shop.Cart.totals", "/build/shop_tests", "totals"));
        let run = ConvertedRun {
            cases: vec![Arc::clone(&case)],
            results: vec![HostTestResult {
                test_case: case,
                display_name: "totals".to_string(),
                outcome: HostOutcome::Passed,
                duration: Duration::from_millis(3),
                computer_name: "ci-01".to_string(),
                error_message: None,
                error_stack_trace: None,
            }],
            rejected: 0,
        };

        let dir = tempfile::tempdir().unwrap();
        let path = write_report(dir.path(), "/build/shop_tests", &run).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("shop.Cart.totals"));
        assert!(content.contains("\"passed\""));
    }
}
