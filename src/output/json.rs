//! JSON output formatting

use crate::output::SimulationReport;
use crate::Result;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write JSON report to file
pub fn write_json_report(output_path: &Path, report: &SimulationReport, pretty: bool) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output: {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    if pretty {
        serde_json::to_writer_pretty(writer, report)?;
    } else {
        serde_json::to_writer(writer, report)?;
    }

    log::info!("Wrote JSON report to {}", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationMode;
    use crate::stats::ArrivalSummary;

    fn sample_report() -> SimulationReport {
        SimulationReport {
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
            mode: SimulationMode::Incremental,
            runs: 4,
            steps: 10,
            dim: 2,
            seed: Some(1),
            elapsed_secs: 0.5,
            arrivals: vec![
                ArrivalSummary {
                    target: 2.0,
                    total_runs: 4,
                    reached_runs: 3,
                    mean_first_arrival: Some(4.0),
                },
                ArrivalSummary {
                    target: 20.0,
                    total_runs: 4,
                    reached_runs: 0,
                    mean_first_arrival: None,
                },
            ],
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json_report(&path, &sample_report(), true).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let report: SimulationReport = serde_json::from_str(&text).unwrap();
        assert_eq!(report, sample_report());
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_json_layout() {
        let value = serde_json::to_value(sample_report()).unwrap();

        assert_eq!(value["mode"], "incremental");
        assert_eq!(value["arrivals"][0]["mean_first_arrival"], 4.0);
        assert!(value["arrivals"][1]["mean_first_arrival"].is_null());
    }

    #[test]
    fn test_write_to_missing_directory() {
        let err = write_json_report(Path::new("/nonexistent/dir/report.json"), &sample_report(), false).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create JSON output"));
    }
}
